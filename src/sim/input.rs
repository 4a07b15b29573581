//! Held-key tracking
//!
//! The host feeds key-down/key-up names into a `KeySampler`; movement reads
//! the resolved `HeldKeys` out.

/// A movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which physical key produced a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Arrow,
    Letter,
}

impl KeySource {
    fn bit(self) -> u8 {
        match self {
            KeySource::Arrow => 0b01,
            KeySource::Letter => 0b10,
        }
    }
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` name (arrows and WASD)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::parse_key(key).map(|(dir, _)| dir)
    }

    /// Like `from_key`, but also reports which alias was pressed
    pub fn parse_key(key: &str) -> Option<(Self, KeySource)> {
        use KeySource::{Arrow, Letter};
        match key {
            "ArrowUp" => Some((Direction::Up, Arrow)),
            "ArrowDown" => Some((Direction::Down, Arrow)),
            "ArrowLeft" => Some((Direction::Left, Arrow)),
            "ArrowRight" => Some((Direction::Right, Arrow)),
            "w" | "W" => Some((Direction::Up, Letter)),
            "s" | "S" => Some((Direction::Down, Letter)),
            "a" | "A" => Some((Direction::Left, Letter)),
            "d" | "D" => Some((Direction::Right, Letter)),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Currently held movement directions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Unit step per axis. Opposing keys cancel out.
    pub fn axis(&self) -> (f32, f32) {
        let x = self.right as i8 - self.left as i8;
        let y = self.down as i8 - self.up as i8;
        (x as f32, y as f32)
    }
}

/// Raw key state per alias.
///
/// A direction stays held while any of its aliases is down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySampler {
    /// One `KeySource` bit per direction
    down: [u8; 4],
}

impl KeySampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down by name. Returns true if the key is a movement key.
    pub fn key_down(&mut self, key: &str) -> bool {
        match Direction::parse_key(key) {
            Some((dir, source)) => {
                self.down[dir.index()] |= source.bit();
                true
            }
            None => false,
        }
    }

    /// Handle a key-up by name. Returns true if the key is a movement key.
    pub fn key_up(&mut self, key: &str) -> bool {
        match Direction::parse_key(key) {
            Some((dir, source)) => {
                self.down[dir.index()] &= !source.bit();
                true
            }
            None => false,
        }
    }

    /// Release everything (focus loss)
    pub fn clear(&mut self) {
        self.down = [0; 4];
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.down[dir.index()] != 0
    }

    /// Resolve to the per-direction set movement reads
    pub fn held(&self) -> HeldKeys {
        HeldKeys {
            up: self.is_held(Direction::Up),
            down: self.is_held(Direction::Down),
            left: self.is_held(Direction::Left),
            right: self.is_held(Direction::Right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_alias() {
        let mut keys = KeySampler::new();
        assert!(keys.key_down("ArrowLeft"));
        assert!(keys.key_down("W"));
        let held = keys.held();
        assert!(held.left && held.up);

        // Releasing the other alias leaves the arrow held
        assert!(keys.key_up("a"));
        assert!(keys.is_held(Direction::Left));
        assert!(keys.key_up("ArrowLeft"));
        assert!(!keys.held().left);
        assert!(!keys.key_down("Enter"));
    }

    #[test]
    fn test_direction_held_while_any_alias_down() {
        let mut keys = KeySampler::new();
        keys.key_down("ArrowLeft");
        keys.key_down("a");
        keys.key_up("a");
        assert!(keys.held().left);

        keys.key_down("a");
        keys.key_up("ArrowLeft");
        assert!(keys.held().left);

        keys.key_up("A");
        assert!(!keys.held().left);
    }

    #[test]
    fn test_clear_releases_all_aliases() {
        let mut keys = KeySampler::new();
        keys.key_down("ArrowUp");
        keys.key_down("w");
        keys.key_down("d");
        keys.clear();
        assert_eq!(keys.held(), HeldKeys::default());
    }

    #[test]
    fn test_axis_diagonal_and_cancel() {
        let keys = HeldKeys {
            up: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(keys.axis(), (1.0, -1.0));

        let keys = HeldKeys {
            left: true,
            right: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(keys.axis(), (0.0, 1.0));
    }
}
