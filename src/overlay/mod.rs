use serde::{Deserialize, Serialize};

/// Color/weight/shadow theme applied to overlay text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayStyle {
    Light,
    Dark,
    Vibrant,
    Muted,
    Elegant,
    Bold,
}

/// Placement of the text block within the containing image area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextPosition {
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

/// Responsive scale tier for title/description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl OverlayStyle {
    pub const ALL: [OverlayStyle; 6] = [
        OverlayStyle::Light,
        OverlayStyle::Dark,
        OverlayStyle::Vibrant,
        OverlayStyle::Muted,
        OverlayStyle::Elegant,
        OverlayStyle::Bold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayStyle::Light => "light",
            OverlayStyle::Dark => "dark",
            OverlayStyle::Vibrant => "vibrant",
            OverlayStyle::Muted => "muted",
            OverlayStyle::Elegant => "elegant",
            OverlayStyle::Bold => "bold",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == value.trim().to_lowercase())
    }

    fn theme(&self) -> StyleTheme {
        match self {
            OverlayStyle::Light => StyleTheme {
                text_color: "text-white",
                shadow: "drop-shadow-[0_2px_4px_rgba(0,0,0,0.8)]",
                background: None,
                font_weight: "font-normal",
                letter_spacing: "tracking-wide",
            },
            OverlayStyle::Dark => StyleTheme {
                text_color: "text-gray-900",
                shadow: "drop-shadow-[0_2px_4px_rgba(255,255,255,0.8)]",
                background: None,
                font_weight: "font-semibold",
                letter_spacing: "tracking-wide",
            },
            OverlayStyle::Vibrant => StyleTheme {
                text_color: "text-yellow-400",
                shadow: "drop-shadow-[0_2px_8px_rgba(0,0,0,0.9)]",
                background: Some("bg-gradient-to-r from-pink-500 to-purple-600"),
                font_weight: "font-bold",
                letter_spacing: "tracking-wider",
            },
            OverlayStyle::Muted => StyleTheme {
                text_color: "text-gray-600",
                shadow: "drop-shadow-[0_1px_3px_rgba(0,0,0,0.5)]",
                background: None,
                font_weight: "font-light",
                letter_spacing: "tracking-normal",
            },
            OverlayStyle::Elegant => StyleTheme {
                text_color: "text-amber-100",
                shadow: "drop-shadow-[0_2px_6px_rgba(0,0,0,0.7)]",
                background: None,
                font_weight: "font-medium",
                letter_spacing: "tracking-widest",
            },
            OverlayStyle::Bold => StyleTheme {
                text_color: "text-red-600",
                shadow: "drop-shadow-[0_3px_6px_rgba(0,0,0,0.8)]",
                background: None,
                font_weight: "font-black",
                letter_spacing: "tracking-tight",
            },
        }
    }
}

impl TextPosition {
    pub const ALL: [TextPosition; 5] = [
        TextPosition::Center,
        TextPosition::Top,
        TextPosition::Bottom,
        TextPosition::Left,
        TextPosition::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextPosition::Center => "center",
            TextPosition::Top => "top",
            TextPosition::Bottom => "bottom",
            TextPosition::Left => "left",
            TextPosition::Right => "right",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == value.trim().to_lowercase())
    }
}

impl TextSize {
    pub const ALL: [TextSize; 4] = [
        TextSize::Small,
        TextSize::Medium,
        TextSize::Large,
        TextSize::ExtraLarge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextSize::Small => "small",
            TextSize::Medium => "medium",
            TextSize::Large => "large",
            TextSize::ExtraLarge => "extra-large",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == value.trim().to_lowercase())
    }
}

struct StyleTheme {
    text_color: &'static str,
    shadow: &'static str,
    background: Option<&'static str>,
    font_weight: &'static str,
    letter_spacing: &'static str,
}

/// Fully-resolved overlay configuration. Every field is populated; absent
/// inputs have already been replaced by their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextOverlayConfig {
    pub style: OverlayStyle,
    pub position: TextPosition,
    pub size: TextSize,
    pub shadow: bool,
    pub background: bool,
    pub background_opacity: f64,
}

impl Default for TextOverlayConfig {
    fn default() -> Self {
        Self {
            style: OverlayStyle::Light,
            position: TextPosition::Center,
            size: TextSize::Large,
            shadow: true,
            background: false,
            background_opacity: 0.3,
        }
    }
}

/// Overlay configuration as stored on an invitation record: any subset of the
/// six fields may be present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialTextOverlayConfig {
    pub style: Option<OverlayStyle>,
    pub position: Option<TextPosition>,
    pub size: Option<TextSize>,
    pub shadow: Option<bool>,
    pub background: Option<bool>,
    pub background_opacity: Option<f64>,
}

impl PartialTextOverlayConfig {
    /// Substitutes the documented default for every absent field. Total over
    /// its input domain; an empty partial resolves to the default config.
    pub fn resolve(&self) -> TextOverlayConfig {
        let defaults = TextOverlayConfig::default();
        TextOverlayConfig {
            style: self.style.unwrap_or(defaults.style),
            position: self.position.unwrap_or(defaults.position),
            size: self.size.unwrap_or(defaults.size),
            shadow: self.shadow.unwrap_or(defaults.shadow),
            background: self.background.unwrap_or(defaults.background),
            background_opacity: self.background_opacity.unwrap_or(defaults.background_opacity),
        }
    }

    /// Layers `self` over `base`: fields present here win, the rest fall
    /// through to `base` (used for site-wide overlay defaults from settings).
    pub fn resolve_over(&self, base: &PartialTextOverlayConfig) -> TextOverlayConfig {
        PartialTextOverlayConfig {
            style: self.style.or(base.style),
            position: self.position.or(base.position),
            size: self.size.or(base.size),
            shadow: self.shadow.or(base.shadow),
            background: self.background.or(base.background),
            background_opacity: self.background_opacity.or(base.background_opacity),
        }
        .resolve()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisAlign {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Padding between the text block and one container edge, in rem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeOffset {
    pub edge: Edge,
    pub rem: f64,
}

/// Two-axis alignment of the overlay container plus an optional edge offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementDescriptor {
    pub align_items: AxisAlign,
    pub justify_content: AxisAlign,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<EdgeOffset>,
    pub text_align: TextAlign,
}

impl PlacementDescriptor {
    /// Container classes exactly as the rendering layer expects them.
    pub fn container_classes(&self) -> String {
        format!("flex {}", position_classes(self))
    }
}

fn position_classes(placement: &PlacementDescriptor) -> &'static str {
    match (placement.align_items, placement.justify_content) {
        (AxisAlign::Center, AxisAlign::Center) => "items-center justify-center",
        (AxisAlign::Start, AxisAlign::Center) => "items-start justify-center pt-12",
        (AxisAlign::End, AxisAlign::Center) => "items-end justify-center pb-20",
        (AxisAlign::Center, AxisAlign::Start) => "items-center justify-start pl-12 text-left",
        (AxisAlign::Center, AxisAlign::End) => "items-center justify-end pr-12 text-right",
        // Unreachable from derive_placement; keep the container renderable.
        _ => "items-center justify-center",
    }
}

/// Color, weight and spacing of the overlay text, plus the shadow when the
/// config asks for one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppearanceDescriptor {
    pub text_align: TextAlign,
    pub text_color: &'static str,
    pub font_weight: &'static str,
    pub letter_spacing: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<&'static str>,
}

impl AppearanceDescriptor {
    pub fn content_classes(&self) -> String {
        let align = match self.text_align {
            TextAlign::Left => "text-left",
            TextAlign::Right => "text-right",
            TextAlign::Center => "text-center",
        };
        let mut classes = format!(
            "{} px-4 {} {} {}",
            align, self.text_color, self.font_weight, self.letter_spacing
        );
        if let Some(shadow) = self.shadow {
            classes.push(' ');
            classes.push_str(shadow);
        }
        classes
    }
}

/// Responsive font scales for the title and description at one size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeDescriptor {
    pub title: &'static str,
    pub description: &'static str,
}

impl SizeDescriptor {
    pub fn title_classes(&self) -> String {
        format!("{} font-bold mb-4", self.title)
    }

    pub fn description_classes(&self) -> String {
        format!("{} max-w-2xl mx-auto", self.description)
    }
}

/// Styling of the optional semi-transparent panel behind the text. When the
/// config disables the background both fields are empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundStyleDescriptor {
    pub classes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl BackgroundStyleDescriptor {
    fn none() -> Self {
        Self {
            classes: String::new(),
            background_color: None,
        }
    }
}

pub fn derive_placement(config: &TextOverlayConfig) -> PlacementDescriptor {
    match config.position {
        TextPosition::Center => PlacementDescriptor {
            align_items: AxisAlign::Center,
            justify_content: AxisAlign::Center,
            offset: None,
            text_align: TextAlign::Center,
        },
        TextPosition::Top => PlacementDescriptor {
            align_items: AxisAlign::Start,
            justify_content: AxisAlign::Center,
            offset: Some(EdgeOffset {
                edge: Edge::Top,
                rem: 3.0,
            }),
            text_align: TextAlign::Center,
        },
        TextPosition::Bottom => PlacementDescriptor {
            align_items: AxisAlign::End,
            justify_content: AxisAlign::Center,
            offset: Some(EdgeOffset {
                edge: Edge::Bottom,
                rem: 5.0,
            }),
            text_align: TextAlign::Center,
        },
        TextPosition::Left => PlacementDescriptor {
            align_items: AxisAlign::Center,
            justify_content: AxisAlign::Start,
            offset: Some(EdgeOffset {
                edge: Edge::Left,
                rem: 3.0,
            }),
            text_align: TextAlign::Left,
        },
        TextPosition::Right => PlacementDescriptor {
            align_items: AxisAlign::Center,
            justify_content: AxisAlign::End,
            offset: Some(EdgeOffset {
                edge: Edge::Right,
                rem: 3.0,
            }),
            text_align: TextAlign::Right,
        },
    }
}

pub fn derive_appearance(config: &TextOverlayConfig) -> AppearanceDescriptor {
    let theme = config.style.theme();
    AppearanceDescriptor {
        text_align: derive_placement(config).text_align,
        text_color: theme.text_color,
        font_weight: theme.font_weight,
        letter_spacing: theme.letter_spacing,
        shadow: config.shadow.then_some(theme.shadow),
    }
}

pub fn derive_size(config: &TextOverlayConfig) -> SizeDescriptor {
    match config.size {
        TextSize::Small => SizeDescriptor {
            title: "text-2xl md:text-3xl",
            description: "text-sm md:text-base",
        },
        TextSize::Medium => SizeDescriptor {
            title: "text-3xl md:text-4xl",
            description: "text-base md:text-lg",
        },
        TextSize::Large => SizeDescriptor {
            title: "text-4xl md:text-6xl",
            description: "text-lg md:text-xl",
        },
        TextSize::ExtraLarge => SizeDescriptor {
            title: "text-5xl md:text-7xl",
            description: "text-xl md:text-2xl",
        },
    }
}

pub fn derive_background_style(config: &TextOverlayConfig) -> BackgroundStyleDescriptor {
    if !config.background {
        return BackgroundStyleDescriptor::none();
    }
    let classes = config
        .style
        .theme()
        .background
        .unwrap_or("bg-black")
        .to_string();
    BackgroundStyleDescriptor {
        classes,
        background_color: Some(format!("rgba(0, 0, 0, {})", config.background_opacity)),
    }
}

/// All class strings for one config in a single pass, for the rendering layer
/// and the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayClasses {
    pub container: String,
    pub content: String,
    pub title: String,
    pub description: String,
    pub background: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

pub fn render_classes(config: &TextOverlayConfig) -> OverlayClasses {
    let placement = derive_placement(config);
    let size = derive_size(config);
    let background = derive_background_style(config);
    OverlayClasses {
        container: placement.container_classes(),
        content: derive_appearance(config).content_classes(),
        title: size.title_classes(),
        description: size.description_classes(),
        background: background.classes,
        background_color: background.background_color,
    }
}

/// Every descriptor for one config, as the JSON API and CLI report them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayDescriptors {
    pub config: TextOverlayConfig,
    pub placement: PlacementDescriptor,
    pub appearance: AppearanceDescriptor,
    pub size: SizeDescriptor,
    pub background: BackgroundStyleDescriptor,
    pub classes: OverlayClasses,
}

pub fn derive_all(config: &TextOverlayConfig) -> OverlayDescriptors {
    OverlayDescriptors {
        config: *config,
        placement: derive_placement(config),
        appearance: derive_appearance(config),
        size: derive_size(config),
        background: derive_background_style(config),
        classes: render_classes(config),
    }
}

/// A selectable value with its UI label and short description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayOption {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub fn style_options() -> Vec<OverlayOption> {
    OverlayStyle::ALL
        .iter()
        .map(|style| {
            let (label, description) = match style {
                OverlayStyle::Light => ("Light", "Clean white text with dark shadow"),
                OverlayStyle::Dark => ("Dark", "Dark text with light shadow"),
                OverlayStyle::Vibrant => ("Vibrant", "Bright yellow text with gradient background"),
                OverlayStyle::Muted => ("Muted", "Subtle gray text with soft shadow"),
                OverlayStyle::Elegant => ("Elegant", "Warm amber text with refined styling"),
                OverlayStyle::Bold => ("Bold", "Strong red text with heavy shadow"),
            };
            OverlayOption {
                value: style.as_str(),
                label,
                description,
            }
        })
        .collect()
}

pub fn position_options() -> Vec<OverlayOption> {
    TextPosition::ALL
        .iter()
        .map(|position| {
            let (label, description) = match position {
                TextPosition::Center => ("Center", "Centered text overlay"),
                TextPosition::Top => ("Top", "Text positioned at the top"),
                TextPosition::Bottom => ("Bottom", "Text positioned at the bottom"),
                TextPosition::Left => ("Left", "Text positioned to the left"),
                TextPosition::Right => ("Right", "Text positioned to the right"),
            };
            OverlayOption {
                value: position.as_str(),
                label,
                description,
            }
        })
        .collect()
}

pub fn size_options() -> Vec<OverlayOption> {
    TextSize::ALL
        .iter()
        .map(|size| {
            let (label, description) = match size {
                TextSize::Small => ("Small", "Compact text size"),
                TextSize::Medium => ("Medium", "Standard text size"),
                TextSize::Large => ("Large", "Prominent text size"),
                TextSize::ExtraLarge => ("Extra Large", "Maximum impact text size"),
            };
            OverlayOption {
                value: size.as_str(),
                label,
                description,
            }
        })
        .collect()
}
