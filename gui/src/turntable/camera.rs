use glam::{Mat4, Vec3, Vec4Swizzles};

const MIN_DISTANCE: f32 = 1.0;
const MAX_DISTANCE: f32 = 10_000.0;

/// Orbiting camera with +Z up. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurntableCamera {
    pub azimuth: f32,
    pub elevation: f32,
    pub distance: f32,
    pub fov: f32,
    pub center: Vec3,
}

/// A point after projection: pixel position inside the viewport and distance from the eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub screen: [f32; 2],
    pub depth: f32,
}

impl TurntableCamera {
    /// Look at the box `[0, extent]` from far enough away to see all of it.
    pub fn framing(extent: [f32; 3]) -> Self {
        let center = Vec3::from(extent) * 0.5;
        let radius = center.length().max(MIN_DISTANCE);
        let fov = 45.0_f32;
        Self {
            azimuth: 30.0,
            elevation: 30.0,
            distance: radius / (fov.to_radians() * 0.5).sin(),
            fov,
            center,
        }
    }

    fn direction(&self) -> Vec3 {
        let (az, el) = (self.azimuth.to_radians(), self.elevation.to_radians());
        Vec3::new(el.cos() * az.sin(), -el.cos() * az.cos(), el.sin())
    }

    /// Tangent to the orbit along increasing elevation; never parallel to the view direction.
    fn up(&self) -> Vec3 {
        let (az, el) = (self.azimuth.to_radians(), self.elevation.to_radians());
        Vec3::new(-el.sin() * az.sin(), el.sin() * az.cos(), el.cos())
    }

    pub fn eye(&self) -> Vec3 {
        self.center + self.direction() * self.distance
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye(), self.center, self.up());
        let near = (self.distance * 0.01).max(0.01);
        let far = self.distance * 4.0;
        let proj = Mat4::perspective_rh(self.fov.to_radians(), aspect.max(1e-3), near, far);
        proj * view
    }

    /// Map a world point into a viewport of `size` pixels. `None` when it lies behind the eye.
    pub fn project(&self, view_proj: &Mat4, point: Vec3, size: [f32; 2]) -> Option<Projected> {
        let clip = *view_proj * point.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        Some(Projected {
            screen: [
                (ndc.x + 1.0) * 0.5 * size[0],
                (1.0 - ndc.y) * 0.5 * size[1],
            ],
            depth: clip.w,
        })
    }

    /// Rotate by a pointer drag of `(dx, dy)` pixels.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth = (self.azimuth - dx * 0.5 + 180.0).rem_euclid(360.0) - 180.0;
        self.elevation = (self.elevation + dy * 0.5).clamp(-90.0, 90.0);
    }

    /// Scale the eye distance; values below 1 move closer.
    pub fn zoom(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        }
    }

    /// Slide the center within the view plane by a drag of `(dx, dy)` pixels.
    pub fn pan(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let forward = -self.direction();
        let up = self.up();
        let right = forward.cross(up).normalize_or_zero();
        let units_per_pixel =
            2.0 * self.distance * (self.fov.to_radians() * 0.5).tan() / viewport_height.max(1.0);
        self.center += (-dx * right + dy * up) * units_per_pixel;
    }
}
