//! Static glyph-width tables for the PDF standard Helvetica faces.
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em. Oblique faces share
//! the widths of their upright counterparts. Tables cover ASCII 0x20..=0x7E
//! (95 printable characters); index = (char as usize) - 32.

// ────────────────────────────────────────────────────────────────────────────
// Font style enum
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Width table for one face.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub name: &'static str,
    widths: [u16; 95],
    /// Fallback width for non-ASCII characters.
    pub average_char_width: u16,
}

impl FontMetricTable {
    /// Rendered width of `s` in points at `size_pt`.
    pub fn measure_str(&self, s: &str, size_pt: f32) -> f32 {
        let units: u32 = s
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32] as u32
                } else {
                    self.average_char_width as u32
                }
            })
            .sum();
        units as f32 * size_pt / 1000.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    name: "Helvetica",
    #[rustfmt::skip]
    widths: [
        // sp  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0   1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :   ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A   B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N   O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [   \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a   b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n   o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {   |    }    ~
        334, 260, 334, 584,
    ],
    average_char_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    name: "Helvetica-Bold",
    #[rustfmt::skip]
    widths: [
        // sp  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0   1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :   ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A   B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N   O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [   \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a   b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n   o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {   |    }    ~
        389, 280, 389, 584,
    ],
    average_char_width: 611,
};

/// Returns the width table for a face.
pub fn get_metrics(style: FontStyle) -> &'static FontMetricTable {
    if style.is_bold() {
        &HELVETICA_BOLD_TABLE
    } else {
        &HELVETICA_TABLE
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(FontStyle::Normal).measure_str("", 12.0), 0.0);
    }

    #[test]
    fn test_measure_str_scales_with_size() {
        let metrics = get_metrics(FontStyle::Normal);
        // "Rust" = R(722) + u(556) + s(500) + t(278) = 2056 units
        let width = metrics.measure_str("Rust", 10.0);
        assert!((width - 20.56).abs() < 1e-3, "got {width}");
        assert!((metrics.measure_str("Rust", 20.0) - 2.0 * width).abs() < 1e-3);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Senior Backend Engineer";
        assert!(
            get_metrics(FontStyle::Bold).measure_str(text, 12.0)
                > get_metrics(FontStyle::Normal).measure_str(text, 12.0)
        );
    }

    #[test]
    fn test_italic_shares_upright_widths() {
        assert_eq!(get_metrics(FontStyle::Italic).name, "Helvetica");
        assert_eq!(get_metrics(FontStyle::BoldItalic).name, "Helvetica-Bold");
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let metrics = get_metrics(FontStyle::Normal);
        let width = metrics.measure_str("é", 1000.0);
        assert!((width - metrics.average_char_width as f32).abs() < 1e-3);
    }
}
