use ggez::input::keyboard::KeyCode::{self, *};
use itertools::Itertools;

use crate::basic::Dir;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Action {
    Turn(Dir),
    /// Grows the snake or ends the game depending on the variant
    Debug,
    RelocateFood,
    Quit,
}

#[derive(Copy, Clone, Debug)]
pub struct Controls {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,

    pub debug: KeyCode,
    pub relocate_food: KeyCode,
    pub quit: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        #[rustfmt::skip]
        let controls = Self {
            forward: Up, backward: Down, left: Left, right: Right,
            debug: Space, relocate_food: C, quit: Escape,
        };
        controls
    }
}

impl Controls {
    fn bindings(&self) -> [(KeyCode, Action); 7] {
        [
            (self.forward, Action::Turn(Dir::Forward)),
            (self.backward, Action::Turn(Dir::Backward)),
            (self.left, Action::Turn(Dir::Left)),
            (self.right, Action::Turn(Dir::Right)),
            (self.debug, Action::Debug),
            (self.relocate_food, Action::RelocateFood),
            (self.quit, Action::Quit),
        ]
    }

    pub fn action(&self, key: KeyCode) -> Option<Action> {
        self.bindings()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, action)| action)
    }

    /// No key may be bound to two actions
    pub fn is_unambiguous(&self) -> bool {
        self.bindings().iter().map(|(k, _)| *k).all_unique()
    }
}

#[test]
fn test_default_controls() {
    let controls = Controls::default();
    assert!(controls.is_unambiguous());

    assert_eq!(controls.action(Up), Some(Action::Turn(Dir::Forward)));
    assert_eq!(controls.action(Down), Some(Action::Turn(Dir::Backward)));
    assert_eq!(controls.action(Left), Some(Action::Turn(Dir::Left)));
    assert_eq!(controls.action(Right), Some(Action::Turn(Dir::Right)));
    assert_eq!(controls.action(Space), Some(Action::Debug));
    assert_eq!(controls.action(C), Some(Action::RelocateFood));
    assert_eq!(controls.action(Escape), Some(Action::Quit));
    assert_eq!(controls.action(G), None);
}

#[test]
fn test_ambiguous_controls() {
    let controls = Controls { debug: Up, ..Controls::default() };
    assert!(!controls.is_unambiguous());
}
