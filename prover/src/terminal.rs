use std::collections::HashMap;

pub type StyleId = u8;

/// Holds the styles of the terminal output, indexed by [`StyleId`]. An empty stylus leaves
/// the output unstyled.
#[derive(Clone, Default)]
pub struct Stylus {
    styles: HashMap<StyleId, Style>,
}

impl Stylus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_style(&mut self, id: StyleId, style: Style) {
        self.styles.insert(id, style);
    }

    pub fn set(&self, id: StyleId) {
        if let Some(style) = self.styles.get(&id) {
            self.set_style(style);
        }
    }

    pub fn set_style(&self, style: &Style) {
        self.clear();
        Self::apply(style);
    }

    pub fn clear(&self) {
        if self.styles.is_empty() {
            return;
        }
        if let Some(mut term) = term::stdout() {
            let _ = term.reset();
        }
    }

    // styling is best effort: a terminal that does not support it is left alone
    fn apply(style: &Style) {
        if let Some(mut term) = term::stdout() {
            if let Some(color) = style.color {
                let _ = term.fg(color);
            }
            if let Some(attr) = style.attr {
                let _ = term.attr(attr);
            }
        }
    }
}

impl Drop for Stylus {
    fn drop(&mut self) {
        self.clear();
    }
}

#[derive(Clone, Default)]
pub struct Style {
    color: Option<term::color::Color>,
    attr: Option<term::Attr>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(self, color: term::color::Color) -> Self {
        Self {
            color: Some(color),
            ..self
        }
    }

    pub fn attribute(self, attr: term::Attr) -> Self {
        Self {
            attr: Some(attr),
            ..self
        }
    }
}
