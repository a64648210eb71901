use std::fmt;
use std::str::FromStr;

use crate::canvas::Color;
use crate::error::ExportError;

/// Selectable visual presets over the single quotation template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    /// Large logo header, gradient banners, striped flight table.
    #[default]
    Classic,
    /// Tighter rows and fonts, flat banners, boxed flight table.
    Compact,
}

impl ThemeName {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Classic => "classic",
            ThemeName::Compact => "compact",
        }
    }

    pub fn styles(self) -> DocumentStyles {
        match self {
            ThemeName::Classic => DocumentStyles::classic(),
            ThemeName::Compact => DocumentStyles::compact(),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(ThemeName::Classic),
            "compact" => Ok(ThemeName::Compact),
            other => Err(ExportError::UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub brand: Color,
    pub title: Color,
    pub banner_top: Color,
    pub banner_bottom: Color,
    pub banner_border: Color,
    pub banner_text: Color,
    pub label: Color,
    pub value: Color,
    pub affirm: Color,
    pub warn: Color,
    pub divider: Color,
    pub footer_text: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageStyles {
    /// Left, right and top margin of the body.
    pub margin: f32,
    /// Space kept clear above the page bottom for the footer band.
    pub bottom_margin: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStyles {
    pub logo_width: f32,
    pub logo_max_height: f32,
    pub logo_advance: f32,
    pub title: String,
    pub title_size: f32,
    pub title_advance: f32,
    pub divider_width: f32,
    pub divider_gap: f32,
    pub fallback_text: String,
    pub fallback_size: f32,
    pub fallback_advance: f32,
    pub fallback_divider_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterStyles {
    pub inset: f32,
    pub height: f32,
    pub fallback_text: String,
    pub fallback_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BannerStyles {
    pub height: f32,
    pub radius: f32,
    pub text_size: f32,
    pub text_inset: f32,
    pub gradient: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableColors {
    pub header_fill: Color,
    pub header_text: Color,
    /// Alternating body fills, even rows first.
    pub stripes: [Color; 2],
    pub highlight_fill: Color,
    pub cell_text: Color,
    pub border: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub header_height: f32,
    pub row_height: f32,
    pub padding: f32,
    pub header_size: f32,
    pub body_size: f32,
    /// Capped at the row height less its padding.
    pub logo_height: f32,
    pub border_width: f32,
    /// Outline every row box as well as the cell separators.
    pub outlined: bool,
    pub colors: TableColors,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InfoListStyles {
    pub inset: f32,
    pub label_width: f32,
    pub value_offset: f32,
    pub row_height: f32,
    pub text_size: f32,
    pub divider_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpacingStyles {
    pub section_gap: f32,
    pub line_advance: f32,
    pub after_banner: f32,
    pub after_table: f32,
    pub after_fare: f32,
    pub heading_size: f32,
    pub heading_advance: f32,
}

/// Every measurement and color the template uses, in points.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStyles {
    pub theme: ThemeName,
    pub palette: Palette,
    pub page: PageStyles,
    pub header: HeaderStyles,
    pub footer: FooterStyles,
    pub banner: BannerStyles,
    pub spacing: SpacingStyles,
    pub flight_table: TableLayout,
    pub flight_columns: Vec<f32>,
    pub fare_table: TableLayout,
    pub fare_columns: Vec<f32>,
    pub info_list: InfoListStyles,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self::classic()
    }
}

const BRAND_BLUE: Color = Color::rgb(0x00, 0x5d, 0xa0);

fn palette() -> Palette {
    Palette {
        brand: BRAND_BLUE,
        title: Color::BLACK,
        banner_top: Color::rgb(0xf8, 0xf9, 0xfa),
        banner_bottom: Color::rgb(0xe9, 0xec, 0xef),
        banner_border: Color::rgb(0xde, 0xe2, 0xe6),
        banner_text: Color::rgb(0x49, 0x50, 0x57),
        label: Color::rgb(0x33, 0x33, 0x33),
        value: Color::rgb(0x55, 0x55, 0x55),
        affirm: Color::rgb(0x28, 0xa7, 0x45),
        warn: Color::rgb(0xdc, 0x35, 0x45),
        divider: Color::rgb(0xee, 0xee, 0xee),
        footer_text: Color::rgb(0x66, 0x66, 0x66),
    }
}

fn striped_colors() -> TableColors {
    TableColors {
        header_fill: BRAND_BLUE,
        header_text: Color::WHITE,
        stripes: [Color::rgb(0xf8, 0xf9, 0xfa), Color::WHITE],
        highlight_fill: Color::rgb(0xff, 0xf3, 0xcd),
        cell_text: Color::rgb(0x21, 0x25, 0x29),
        border: BRAND_BLUE,
    }
}

fn boxed_colors() -> TableColors {
    TableColors {
        stripes: [Color::WHITE, Color::WHITE],
        cell_text: Color::BLACK,
        ..striped_colors()
    }
}

impl DocumentStyles {
    pub fn classic() -> Self {
        Self {
            theme: ThemeName::Classic,
            palette: palette(),
            page: PageStyles {
                margin: 40.0,
                bottom_margin: 70.0,
            },
            header: HeaderStyles {
                logo_width: 140.0,
                logo_max_height: 80.0,
                logo_advance: 90.0,
                title: "FLIGHT QUOTATION".to_string(),
                title_size: 25.0,
                title_advance: 35.0,
                divider_width: 1.5,
                divider_gap: 15.0,
                fallback_text: "Flight Quotation System".to_string(),
                fallback_size: 14.0,
                fallback_advance: 30.0,
                fallback_divider_width: 3.0,
            },
            footer: FooterStyles {
                inset: 1.0,
                height: 60.0,
                fallback_text: "Flight Quotation".to_string(),
                fallback_size: 10.0,
            },
            banner: BannerStyles {
                height: 30.0,
                radius: 5.0,
                text_size: 12.0,
                text_inset: 10.0,
                gradient: true,
            },
            spacing: SpacingStyles {
                section_gap: 10.0,
                line_advance: 20.0,
                after_banner: 8.0,
                after_table: 15.0,
                after_fare: 20.0,
                heading_size: 12.0,
                heading_advance: 22.0,
            },
            flight_table: TableLayout {
                header_height: 30.0,
                row_height: 35.0,
                padding: 8.0,
                header_size: 11.0,
                body_size: 10.0,
                logo_height: 40.0,
                border_width: 0.5,
                outlined: false,
                colors: striped_colors(),
            },
            flight_columns: vec![70.0, 60.0, 60.0, 69.0, 60.0, 60.0, 60.0, 70.0, 50.0],
            fare_table: TableLayout {
                header_height: 25.0,
                row_height: 30.0,
                padding: 10.0,
                header_size: 11.0,
                body_size: 11.0,
                logo_height: 0.0,
                border_width: 1.0,
                outlined: true,
                colors: boxed_colors(),
            },
            fare_columns: vec![100.0, 150.0],
            info_list: InfoListStyles {
                inset: 10.0,
                label_width: 160.0,
                value_offset: 180.0,
                row_height: 20.0,
                text_size: 10.0,
                divider_width: 0.5,
            },
        }
    }

    pub fn compact() -> Self {
        let classic = Self::classic();
        Self {
            theme: ThemeName::Compact,
            header: HeaderStyles {
                logo_width: 110.0,
                logo_max_height: 60.0,
                logo_advance: 68.0,
                title_size: 20.0,
                title_advance: 28.0,
                divider_gap: 12.0,
                ..classic.header
            },
            banner: BannerStyles {
                height: 24.0,
                radius: 3.0,
                text_size: 10.0,
                text_inset: 8.0,
                gradient: false,
            },
            spacing: SpacingStyles {
                section_gap: 6.0,
                line_advance: 16.0,
                after_banner: 6.0,
                after_table: 10.0,
                after_fare: 14.0,
                heading_size: 10.0,
                heading_advance: 18.0,
            },
            flight_table: TableLayout {
                header_height: 24.0,
                row_height: 26.0,
                padding: 6.0,
                header_size: 9.0,
                body_size: 9.0,
                logo_height: 20.0,
                border_width: 0.5,
                outlined: true,
                colors: boxed_colors(),
            },
            flight_columns: vec![66.0, 57.0, 57.0, 66.0, 57.0, 57.0, 57.0, 67.0, 48.0],
            fare_table: TableLayout {
                header_height: 20.0,
                row_height: 24.0,
                padding: 8.0,
                header_size: 9.0,
                body_size: 10.0,
                ..classic.fare_table
            },
            info_list: InfoListStyles {
                label_width: 150.0,
                value_offset: 165.0,
                row_height: 16.0,
                text_size: 9.0,
                ..classic.info_list
            },
            ..classic
        }
    }

    /// Width available to body content between the side margins.
    pub fn content_width(&self, page_width: f32) -> f32 {
        page_width - self.page.margin * 2.0
    }
}
