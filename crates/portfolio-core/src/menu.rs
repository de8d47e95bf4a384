//! Mobile menu open/closed flag

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger button
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any navigation click
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_then_navigate_closes() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
