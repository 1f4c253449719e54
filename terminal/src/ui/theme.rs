//! # GUI Theme
//!
//! Dark banking theme for egui: deep navy panels, white text, teal accent.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};

/// Bank color palette
#[derive(Clone)]
pub struct BankColors {
    /// Window background
    pub background: Color32,
    /// Raised surfaces (cards, modals)
    pub surface: Color32,
    /// Primary text
    pub text: Color32,
    /// Brand accent (buttons, headings, selection)
    pub accent: Color32,
    /// Darker accent for pressed states
    pub accent_dark: Color32,
    /// Borders
    pub border: Color32,
    /// Success green
    pub green_success: Color32,
    /// Error red
    pub red_error: Color32,
    /// Warning amber
    pub yellow_warning: Color32,
    /// Info blue
    pub blue_info: Color32,
    /// Secondary text
    pub gray_secondary: Color32,
}

impl Default for BankColors {
    fn default() -> Self {
        BankColors {
            background: Color32::from_rgb(13, 20, 33),       // #0D1421
            surface: Color32::from_rgb(22, 32, 51),          // #162033
            text: Color32::from_rgb(236, 240, 245),          // #ECF0F5
            accent: Color32::from_rgb(0, 168, 150),          // #00A896
            accent_dark: Color32::from_rgb(0, 120, 108),     // #00786C
            border: Color32::from_rgb(44, 58, 82),           // #2C3A52
            green_success: Color32::from_rgb(46, 204, 113),  // #2ECC71
            red_error: Color32::from_rgb(231, 76, 60),       // #E74C3C
            yellow_warning: Color32::from_rgb(243, 156, 18), // #F39C12
            blue_info: Color32::from_rgb(93, 156, 236),      // #5D9CEC
            gray_secondary: Color32::from_rgb(140, 152, 170),
        }
    }
}

/// Application theme
pub struct Theme {
    /// Color palette
    pub colors: BankColors,
    pub normal: Color32,
    /// Selected/highlighted items
    pub selected: Color32,
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    /// Incoming money
    pub credit: Color32,
    /// Outgoing money
    pub debit: Color32,
    pub background: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let colors = BankColors::default();
        Theme {
            colors: colors.clone(),
            normal: colors.text,
            selected: colors.accent,
            border: colors.border,
            dim: colors.gray_secondary,
            success: colors.green_success,
            error: colors.red_error,
            warning: colors.yellow_warning,
            info: colors.blue_info,
            credit: colors.green_success,
            debit: colors.red_error,
            background: colors.background,
        }
    }
}

impl Theme {
    /// Signed amount with the matching color
    pub fn format_amount(&self, amount: f64, currency: &str, outgoing: bool) -> (String, Color32) {
        if outgoing {
            (format!("-{:.2} {}", amount.abs(), currency), self.debit)
        } else {
            (format!("+{:.2} {}", amount.abs(), currency), self.credit)
        }
    }

    /// egui Visuals for the bank palette
    pub fn bank_visuals() -> Visuals {
        let colors = BankColors::default();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);

        visuals.faint_bg_color = colors.surface;
        visuals.extreme_bg_color = colors.background;
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);

        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.surface;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.weak_bg_fill = colors.surface;

        visuals.widgets.hovered.bg_fill = colors.accent_dark;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, colors.accent);
        visuals.widgets.hovered.weak_bg_fill = colors.accent_dark;

        visuals.widgets.active.bg_fill = colors.accent;
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, colors.accent);
        visuals.widgets.active.weak_bg_fill = colors.accent;

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(0, 168, 150, 90);
        visuals.selection.stroke = Stroke::new(1.5, colors.accent);

        visuals.hyperlink_color = colors.blue_info;
        visuals
    }

    /// Apply the bank theme to an egui context
    pub fn apply_bank_theme(ctx: &Context) {
        let visuals = Self::bank_visuals();

        // style_mut_of, not set_visuals: both egui themes get the same look
        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            let visuals = visuals.clone();
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals;
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.window_margin = egui::Margin::same(12);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
            });
        }

        tracing::debug!("Applied bank theme");
    }
}
