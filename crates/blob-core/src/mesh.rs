use crate::deform::RestPose;
use crate::error::MeshError;
use fnv::FnvHashMap;
use glam::Vec3;

/// Highest subdivision level accepted by [`BlobMesh::icosphere`].
pub const MAX_DETAIL: u32 = 128;

const QUANTIZE: f32 = 1.0e5;

/// Indexed triangle mesh with an immutable rest pose and a displayed copy.
///
/// The rest pose is captured at construction and is never written again;
/// `positions` and `normals` are rewritten every frame by the deformer.
#[derive(Clone, Debug)]
pub struct BlobMesh {
    rest: Vec<Vec3>,
    rest_normals: Vec<Vec3>,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    indices: Vec<u32>,
    dirty: bool,
}

impl BlobMesh {
    /// Geodesic sphere built by splitting each icosahedron face into
    /// `(detail + 1)^2` triangles and projecting onto `radius`.
    pub fn icosphere(radius: f32, detail: u32) -> Result<Self, MeshError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(MeshError::ZeroRadius(radius));
        }
        if detail > MAX_DETAIL {
            return Err(MeshError::DetailTooLarge {
                detail,
                max: MAX_DETAIL,
            });
        }

        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let base = [
            Vec3::new(-1.0, t, 0.0),
            Vec3::new(1.0, t, 0.0),
            Vec3::new(-1.0, -t, 0.0),
            Vec3::new(1.0, -t, 0.0),
            Vec3::new(0.0, -1.0, t),
            Vec3::new(0.0, 1.0, t),
            Vec3::new(0.0, -1.0, -t),
            Vec3::new(0.0, 1.0, -t),
            Vec3::new(t, 0.0, -1.0),
            Vec3::new(t, 0.0, 1.0),
            Vec3::new(-t, 0.0, -1.0),
            Vec3::new(-t, 0.0, 1.0),
        ];
        const FACES: [[usize; 3]; 20] = [
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        let cols = detail as usize + 1;
        let mut builder = SphereBuilder::new(radius, cols);
        for face in FACES {
            let (a, b, c) = (base[face[0]], base[face[1]], base[face[2]]);
            builder.subdivide(a, b, c);
        }
        let (positions, indices) = builder.finish();
        log::debug!(
            "[mesh] icosphere r={} detail={} verts={} tris={}",
            radius,
            detail,
            positions.len(),
            indices.len() / 3
        );
        Ok(Self::from_parts(positions, indices))
    }

    /// Wrap existing geometry; the given positions become the rest pose.
    pub fn from_parts(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let mut mesh = Self {
            rest: positions.clone(),
            rest_normals: Vec::new(),
            normals: vec![Vec3::ZERO; positions.len()],
            positions,
            indices,
            dirty: true,
        };
        mesh.recompute_normals();
        mesh.rest_normals = mesh.normals.clone();
        mesh
    }

    #[inline]
    pub fn rest(&self) -> &[Vec3] {
        &self.rest
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.rest.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn rest_normals(&self) -> &[Vec3] {
        &self.rest_normals
    }

    /// Rest pose for reading alongside the displayed buffer for writing.
    #[inline]
    pub fn split_for_deform(&mut self) -> (RestPose<'_>, &mut [Vec3]) {
        (
            RestPose {
                positions: &self.rest,
                normals: &self.rest_normals,
            },
            &mut self.positions,
        )
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether an upload is pending and clears the flag.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Area-weighted average of adjacent face normals per vertex.
    pub fn recompute_normals(&mut self) {
        for n in self.normals.iter_mut() {
            *n = Vec3::ZERO;
        }
        for tri in self.indices.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (a, b, c) = (self.positions[ia], self.positions[ib], self.positions[ic]);
            // Unnormalised cross product carries twice the triangle area
            let face = (b - a).cross(c - a);
            self.normals[ia] += face;
            self.normals[ib] += face;
            self.normals[ic] += face;
        }
        for (n, p) in self.normals.iter_mut().zip(self.positions.iter()) {
            *n = n
                .try_normalize()
                .or_else(|| p.try_normalize())
                .unwrap_or(Vec3::Y);
        }
    }
}

struct SphereBuilder {
    radius: f32,
    cols: usize,
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    lookup: FnvHashMap<[i32; 3], u32>,
}

impl SphereBuilder {
    fn new(radius: f32, cols: usize) -> Self {
        let approx = 10 * cols * cols + 2;
        Self {
            radius,
            cols,
            positions: Vec::with_capacity(approx),
            indices: Vec::with_capacity(20 * cols * cols * 3),
            lookup: FnvHashMap::with_capacity_and_hasher(approx, Default::default()),
        }
    }

    fn vertex(&mut self, p: Vec3) -> u32 {
        let unit = p.normalize();
        let key = [
            (unit.x * QUANTIZE).round() as i32,
            (unit.y * QUANTIZE).round() as i32,
            (unit.z * QUANTIZE).round() as i32,
        ];
        if let Some(&i) = self.lookup.get(&key) {
            return i;
        }
        let i = self.positions.len() as u32;
        self.positions.push(unit * self.radius);
        self.lookup.insert(key, i);
        i
    }

    fn subdivide(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let cols = self.cols;
        let mut grid: Vec<Vec<u32>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let aj = a.lerp(c, i as f32 / cols as f32);
            let bj = b.lerp(c, i as f32 / cols as f32);
            let rows = cols - i;
            let mut row = Vec::with_capacity(rows + 1);
            for j in 0..=rows {
                let p = if j == 0 && i == cols {
                    aj
                } else {
                    aj.lerp(bj, j as f32 / rows as f32)
                };
                row.push(self.vertex(p));
            }
            grid.push(row);
        }
        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                let tri = if j % 2 == 0 {
                    [grid[i][k + 1], grid[i + 1][k], grid[i][k]]
                } else {
                    [grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]
                };
                self.push_outward(tri);
            }
        }
    }

    /// Emit the triangle wound counter-clockwise when seen from outside.
    fn push_outward(&mut self, tri: [u32; 3]) {
        let [a, b, c] = tri.map(|i| self.positions[i as usize]);
        let face = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        if face.dot(centroid) < 0.0 {
            self.indices.extend_from_slice(&[tri[0], tri[2], tri[1]]);
        } else {
            self.indices.extend_from_slice(&tri);
        }
    }

    fn finish(self) -> (Vec<Vec3>, Vec<u32>) {
        (self.positions, self.indices)
    }
}
