/// One best-practice card on the guide tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principle {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PRINCIPLES: [Principle; 6] = [
    Principle {
        icon: "fa-palette",
        title: "Use Color Strategically",
        description: "Colors evoke emotion. Use a palette that aligns with your brand's personality and the feeling you want to inspire. High contrast between background and foreground elements (especially text) is crucial for readability.",
    },
    Principle {
        icon: "fa-users",
        title: "Show Faces When Possible",
        description: "Human faces, especially those showing positive emotion, are incredibly effective at capturing attention and building a connection. Our brains are wired to notice faces.",
    },
    Principle {
        icon: "fa-font",
        title: "Prioritize Text Clarity",
        description: "Your message must be readable in seconds, especially on mobile. Use large, clean fonts. Keep copy concise. Ensure a clear visual hierarchy: Headline > Benefit > Call to Action.",
    },
    Principle {
        icon: "fa-image",
        title: "Keep It Simple & Focused",
        description: "A single, clear focal point is more effective than a cluttered image. The viewer should immediately understand what the ad is about. Avoid visual noise that distracts from the core message.",
    },
    Principle {
        icon: "fa-star",
        title: "Clear Call to Action (CTA)",
        description: "Tell the user exactly what you want them to do next ('Shop Now', 'Learn More', 'Sign Up'). Make the CTA visually distinct using a button or contrasting text.",
    },
    Principle {
        icon: "fa-circle-check",
        title: "Authenticity Over Perfection",
        description: "User-generated content (UGC) and less-polished, 'real' looking photos often outperform slick, professional studio shots. They build trust and feel more relatable.",
    },
];
