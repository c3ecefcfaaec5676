// Page hooks shared by the DOM wiring. The stylesheet owns the visuals; these
// names are the contract between the markup and the effects.

// Class toggled on anything that has finished revealing
pub const VISIBLE_CLASS: &str = "visible";

// Custom cursor
pub const CURSOR: &str = ".custom-cursor";
pub const CURSOR_DOT: &str = ".cursor-dot";
pub const CURSOR_OUTLINE: &str = ".cursor-outline";
pub const CURSOR_TEXT: &str = ".cursor-text";
pub const CURSOR_HOVER_CLASS: &str = "cursor-hover";
pub const CURSOR_ACTIVE_CLASS: &str = "cursor-active";
pub const CURSOR_INTERACTIVE: &str = "a, button, .project-card, .skill-card, input, textarea";
pub const CURSOR_VIEW_LABEL: &str = "View";

// About section cursor restyle
pub const ABOUT_CURSOR_DOT_STYLES: [(&str, &str); 4] = [
    ("width", "12px"),
    ("height", "12px"),
    ("background", "rgba(99, 102, 241, 0.8)"),
    ("box-shadow", "0 0 20px rgba(99, 102, 241, 0.6)"),
];
pub const ABOUT_CURSOR_OUTLINE_STYLES: [(&str, &str); 1] =
    [("border-color", "rgba(99, 102, 241, 0.6)")];

// Hero
pub const HERO: &str = ".hero";
pub const HERO_CONTENT: &str = ".hero-content";
pub const HERO_BACKGROUND: &str = ".hero-background";

// Sections and cards
pub const FADE_IN_SECTION: &str = ".fade-in-section";
pub const PROJECTS_SECTION: &str = ".projects-section";
pub const STAGGER_ITEM: &str = ".stagger-item";
pub const ABOUT_SECTION: &str = ".about-section";
pub const ABOUT_TEXT: &str = ".about-text";
pub const ABOUT_BACKGROUND: &str = ".about-background";
pub const PROJECT_CARD: &str = ".project-card";
pub const SKILL_CARD: &str = ".skill-card";
pub const PARTICLE_CONTAINER: &str = ".particle-container";
pub const PARTICLE_CLASS: &str = "particle";
pub const HOVERED_ATTR: &str = "data-hovered";

// Hero title letters
pub const HERO_TITLE: &str = ".hero-title";
pub const HERO_TEXT_ATTR: &str = "data-text";
pub const LETTER_CONTAINER: &str = ".letter-reveal";
pub const LETTER_CLASS: &str = "letter";

// Degraded mode
pub const ANIMATED_ELEMENTS: &str = ".reveal-text, .fade-in-section, .stagger-item, .letter";
pub const AMBIENT_SHAPES: &str = ".shape";
pub const GRAIN_OVERLAY: &str = ".grain-overlay";

// Buttons and links
pub const MAGNETIC_BUTTON: &str = ".magnetic-button";
pub const RIPPLE_BUTTONS: &str = ".cta-button, .submit-button";
pub const RIPPLE_CLASS: &str = "button-ripple";
pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";

// Contact form
pub const CONTACT_FORM: &str = ".contact-form";
pub const SUBMIT_BUTTON: &str = ".submit-button";
pub const SUBMIT_LABEL: &str = ".submit-button span";

// Diagnostics
pub const WILL_CHANGE_INLINE: &str = "[style*=\"will-change\"]";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
