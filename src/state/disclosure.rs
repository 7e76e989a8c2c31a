//! Disclosure - Open/Closed Toggle for Dialogs

/// Visibility of a single dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn open(&mut self) {
        *self = Disclosure::Open;
    }

    pub fn close(&mut self) {
        *self = Disclosure::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Disclosure::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut d = Disclosure::default();
        assert!(!d.is_open());

        d.open();
        assert!(d.is_open());
        // Opening twice is a no-op
        d.open();
        assert!(d.is_open());

        d.close();
        assert_eq!(d, Disclosure::Closed);
    }
}
