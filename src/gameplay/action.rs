use crate::Chips;

/// A betting decision taken (or synthesized) for one player.
///
/// `Call` carries no amount: the referee computes the matching delta itself,
/// so a bot cannot lie about what a call costs. `Raise(n)` is n chips over
/// the call amount; `Shove` commits the whole remaining stack.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(Chips),
    Shove,
}

impl Action {
    /// True if this is a raise or shove (aggressive action).
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Raise(_) | Action::Shove)
    }
    /// True if this is a fold or check (no chips added).
    pub fn is_passive(&self) -> bool {
        matches!(self, Action::Fold | Action::Check)
    }
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Check => "Check",
            Action::Call => "Call",
            Action::Raise(_) => "Raise",
            Action::Shove => "Shove",
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.first().map(|p| p.to_uppercase()).as_deref() {
            Some("FOLD") => Ok(Action::Fold),
            Some("CHECK") => Ok(Action::Check),
            Some("CALL") => Ok(Action::Call),
            Some("RAISE") => parts
                .get(1)
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .map(Action::Raise)
                .ok_or("invalid raise amount"),
            Some("SHOVE") | Some("ALLIN") => Ok(Action::Shove),
            _ => Err("invalid action type"),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "fold"),
            Action::Check => write!(f, "check"),
            Action::Call => write!(f, "call"),
            Action::Raise(amount) => write!(f, "raise {}", amount),
            Action::Shove => write!(f, "shove"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_actions() {
        assert_eq!(Action::try_from("fold"), Ok(Action::Fold));
        assert_eq!(Action::try_from("CHECK"), Ok(Action::Check));
        assert_eq!(Action::try_from("call"), Ok(Action::Call));
        assert_eq!(Action::try_from("raise 40"), Ok(Action::Raise(40)));
        assert_eq!(Action::try_from("allin"), Ok(Action::Shove));
    }
    #[test]
    fn parse_rejects_garbage() {
        assert!(Action::try_from("").is_err());
        assert!(Action::try_from("raise").is_err());
        assert!(Action::try_from("raise lots").is_err());
        assert!(Action::try_from("raise -30").is_err());
        assert!(Action::try_from("jump").is_err());
    }
    #[test]
    fn display_round_trips() {
        for action in [Action::Fold, Action::Check, Action::Call, Action::Raise(20)] {
            assert_eq!(Action::try_from(action.to_string().as_str()), Ok(action));
        }
    }
    #[test]
    fn classifiers() {
        assert!(Action::Raise(20).is_aggro());
        assert!(Action::Shove.is_aggro());
        assert!(Action::Fold.is_passive());
        assert!(Action::Check.is_passive());
        assert!(!Action::Call.is_aggro());
        assert_eq!(Action::Raise(20).label(), "Raise");
    }
}
