//! Configuration options for HTML serialization

/// How block alignment is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignStyle {
    /// Emit `style="text-align: …;"` only when an alignment is set
    #[default]
    OmitUnset,
    /// Always emit the style; unset alignment renders as `text-align: ;`
    Always,
}

/// Options for HTML serialization
#[derive(Debug, Clone)]
pub struct Options {
    /// Alignment style output
    pub align_style: AlignStyle,

    /// Wrap escaped text in an inner `<span data-slate-string="true">`
    pub string_wrapper: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            align_style: AlignStyle::OmitUnset,
            string_wrapper: true,
        }
    }
}
