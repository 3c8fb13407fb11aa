//! Window frame metrics used for hit testing the chrome

/// Frame metrics matching the stylesheet of the retro window chrome
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub border_width: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 22.0,
    border_width: 2.0,
    button_size: 16.0,
    button_spacing: 2.0,
    button_margin: 4.0,
};
