// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Length of generated ids.
pub const ID_LENGTH: usize = 7;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of fresh record ids.
pub trait IdGenerator {
    /// Returns the next candidate id.
    fn next_id(&mut self) -> String;
}

/// Random lowercase base-36 ids of [`ID_LENGTH`] characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        encode_base36(rand::random::<u64>())
    }
}

/// Deterministic ids `<prefix>1`, `<prefix>2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Creates a generator starting at `<prefix>1`.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id: String = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Draws ids until one is not `taken`.
pub fn fresh_id(ids: &mut dyn IdGenerator, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let candidate: String = ids.next_id();
        if !taken(&candidate) {
            return candidate;
        }
    }
}

fn encode_base36(mut value: u64) -> String {
    let mut digits: Vec<u8> = Vec::with_capacity(ID_LENGTH);
    for _ in 0..ID_LENGTH {
        // value % 36 < 36, so the cast and index are in range
        #[allow(clippy::cast_possible_truncation)]
        let digit: usize = (value % 36) as usize;
        digits.push(BASE36_DIGITS[digit]);
        value /= 36;
    }
    digits.into_iter().map(char::from).collect()
}
