use glam::Vec2;

/// Pointer position in normalized device coordinates (x right, y up, both in [-1, 1]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
}

impl PointerState {
    /// Update from client-space coordinates relative to an element's bounding rect.
    ///
    /// A degenerate rect leaves the pointer untouched.
    pub fn set_from_client(&mut self, client: Vec2, rect_origin: Vec2, rect_size: Vec2) {
        if let Some(ndc) = client_to_ndc(client, rect_origin, rect_size) {
            self.ndc = ndc;
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.ndc = Vec2::ZERO;
    }
}

#[inline]
pub fn client_to_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Option<Vec2> {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return None;
    }
    let rel = (client - rect_origin) / rect_size;
    Some(Vec2::new(rel.x * 2.0 - 1.0, -(rel.y * 2.0) + 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_ndc() {
        let origin = Vec2::new(10.0, 20.0);
        let size = Vec2::new(200.0, 100.0);
        assert_eq!(client_to_ndc(origin, origin, size), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(
            client_to_ndc(origin + size, origin, size),
            Some(Vec2::new(1.0, -1.0))
        );
        assert_eq!(
            client_to_ndc(origin + size * 0.5, origin, size),
            Some(Vec2::ZERO)
        );
    }

    #[test]
    fn degenerate_rect_is_ignored() {
        let mut p = PointerState {
            ndc: Vec2::new(0.5, 0.5),
        };
        p.set_from_client(Vec2::ONE, Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert_eq!(p.ndc, Vec2::new(0.5, 0.5));
        p.reset();
        assert_eq!(p.ndc, Vec2::ZERO);
    }
}
