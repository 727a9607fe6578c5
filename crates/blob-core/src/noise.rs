//! Seeded 3D gradient noise with a fractal (multi-octave) sum.
//!
//! The permutation table is built once from an integer hash and never changes,
//! so every sample is a pure function of its coordinates and the seed.

const TABLE_SIZE: usize = 256;

#[derive(Clone)]
pub struct PerlinNoise {
    perm: [u8; TABLE_SIZE * 2],
}

impl std::fmt::Debug for PerlinNoise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerlinNoise")
            .field("perm[0..8]", &&self.perm[..8])
            .finish()
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PerlinNoise {
    /// Build the 512-entry table for `seed`. Seed 0 reproduces the page's table.
    pub fn new(seed: u32) -> Self {
        let mut p = [0u8; TABLE_SIZE];
        for (i, slot) in p.iter_mut().enumerate() {
            let r = hashed_unit(i as i32, seed);
            // Values in (-1, 1] scaled to a byte, wrapping like a Uint8 store
            *slot = ((r * TABLE_SIZE as f64).floor() as i64).rem_euclid(256) as u8;
        }
        let mut perm = [0u8; TABLE_SIZE * 2];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = p[i & 255];
        }
        Self { perm }
    }

    #[inline]
    pub fn permutation(&self) -> &[u8; TABLE_SIZE * 2] {
        &self.perm
    }

    /// Gradient noise at `(x, y, z)`, roughly in [-1, 1]. Zero on integer lattice points.
    pub fn noise3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let fx = x.floor();
        let fy = y.floor();
        let fz = z.floor();
        let xi = (fx as i32 & 255) as usize;
        let yi = (fy as i32 & 255) as usize;
        let zi = (fz as i32 & 255) as usize;

        let x = x - fx;
        let y = y - fy;
        let z = z - fz;

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let p = &self.perm;
        let a = p[xi] as usize + yi;
        let aa = p[a] as usize + zi;
        let ab = p[a + 1] as usize + zi;
        let b = p[xi + 1] as usize + yi;
        let ba = p[b] as usize + zi;
        let bb = p[b + 1] as usize + zi;

        lerp(
            lerp(
                lerp(grad(p[aa], x, y, z), grad(p[ba], x - 1.0, y, z), u),
                lerp(
                    grad(p[ab], x, y - 1.0, z),
                    grad(p[bb], x - 1.0, y - 1.0, z),
                    u,
                ),
                v,
            ),
            lerp(
                lerp(
                    grad(p[aa + 1], x, y, z - 1.0),
                    grad(p[ba + 1], x - 1.0, y, z - 1.0),
                    u,
                ),
                lerp(
                    grad(p[ab + 1], x, y - 1.0, z - 1.0),
                    grad(p[bb + 1], x - 1.0, y - 1.0, z - 1.0),
                    u,
                ),
                v,
            ),
            w,
        )
    }

    /// Fractal Brownian motion: `octaves` samples at doubling frequency and
    /// `persistence`-decaying amplitude, normalised by the total amplitude.
    ///
    /// Returns 0.0 when `octaves` is 0.
    pub fn fbm(&self, x: f32, y: f32, z: f32, octaves: u32, persistence: f32) -> f32 {
        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;
        for _ in 0..octaves {
            total += self.noise3d(x * frequency, y * frequency, z * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= 2.0;
        }
        if max_value > 0.0 {
            total / max_value
        } else {
            0.0
        }
    }
}

/// Integer-hash scramble mapped to (-1, 1].
///
/// The products are taken in f64 and the sum is wrapped to 32 bits before the
/// mask, so the rounding of the large intermediate products is part of the hash.
fn hashed_unit(index: i32, seed: u32) -> f64 {
    const TWO_POW_32: f64 = 4_294_967_296.0;
    let mut n = index.wrapping_add(seed as i32);
    n = n.wrapping_shl(13) ^ n;
    let x = n as f64;
    let sum = x * (x * x * 15731.0 + 789_221.0) + 1_376_312_589.0;
    let wrapped = sum.trunc().rem_euclid(TWO_POW_32) as u32;
    let h = wrapped & 0x7fff_ffff;
    1.0 - h as f64 / 1_073_741_824.0
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
fn grad(hash: u8, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}
