//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic so a scripted run places the same asteroids every time.

use glam::Vec3;

#[derive(Debug, Clone)]
pub struct Random {
    state: u64,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Random {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Float in [0, 1).
    pub fn float(&mut self) -> f32 {
        // Top 24 bits fill an f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    pub fn float_range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.float()
    }

    /// Integer in [min, max].
    pub fn int_range(&mut self, min: i32, max: i32) -> i32 {
        let span = (max - min) as u64 + 1;
        min + (self.next_u64() % span) as i32
    }

    /// Component-wise random vector between two corners.
    pub fn vector(&mut self, min: Vec3, max: Vec3) -> Vec3 {
        Vec3::new(
            self.float_range(min.x, max.x),
            self.float_range(min.y, max.y),
            self.float_range(min.z, max.z),
        )
    }
}
