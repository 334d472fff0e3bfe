/// Page geometry used by the PDF backend. All lengths in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    pub margin_bottom_mm: f32,
    /// Number of grid units a full-width row is divided into.
    pub grid_columns: u8,
    /// Line height as a multiple of the font size.
    pub line_height_factor: f32,
}

impl PageConfig {
    pub fn content_width_mm(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }

    pub fn content_height_mm(&self) -> f32 {
        self.height_mm - self.margin_top_mm - self.margin_bottom_mm
    }

    /// A4 portrait, 10 mm margins, 12-column grid.
    pub fn a4() -> Self {
        PageConfig {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_left_mm: 10.0,
            margin_top_mm: 10.0,
            margin_right_mm: 10.0,
            margin_bottom_mm: 10.0,
            grid_columns: 12,
            line_height_factor: 1.2,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::a4()
    }
}

pub const PT_PER_MM: f32 = 72.0 / 25.4;

pub fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_MM
}

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}
