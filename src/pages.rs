//! Page navigation for the simulator window.
//!
//! Press `D` to toggle between the watch face and the debug view.
//!
//! # Pages
//!
//! - [`Page::Face`]: The nested digits, exactly as the watch shows them
//! - [`Page::Debug`]: Clock state, render timing and the face's event log

/// Available pages in the simulator.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Watch face. The face is only visible on this page.
    #[default]
    Face,

    /// Debug/profiling page.
    Debug,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Face => Self::Debug,
            Self::Debug => Self::Face,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Face);
    }

    #[test]
    fn test_page_toggle() {
        assert_eq!(Page::Face.toggle(), Page::Debug);
        assert_eq!(Page::Debug.toggle(), Page::Face);
    }

    #[test]
    fn test_page_toggle_cycle() {
        let page = Page::Face.toggle().toggle();
        assert_eq!(page, Page::Face);
    }
}
