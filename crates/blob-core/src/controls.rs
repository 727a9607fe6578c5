/// Named knob exposed as a slider and through the debug handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKey {
    DeformationIntensity,
    AnimationSpeed,
    MouseInfluence,
    Transmission,
    Roughness,
    EnvMapIntensity,
    Opacity,
}

impl ControlKey {
    /// Panel order.
    pub const ALL: [ControlKey; 7] = [
        ControlKey::DeformationIntensity,
        ControlKey::AnimationSpeed,
        ControlKey::MouseInfluence,
        ControlKey::Transmission,
        ControlKey::Roughness,
        ControlKey::EnvMapIntensity,
        ControlKey::Opacity,
    ];

    /// camelCase name used by scripts poking at `window.BlobAnimation`.
    pub fn name(self) -> &'static str {
        match self {
            ControlKey::DeformationIntensity => "deformationIntensity",
            ControlKey::AnimationSpeed => "animationSpeed",
            ControlKey::MouseInfluence => "mouseInfluence",
            ControlKey::Transmission => "transmission",
            ControlKey::Roughness => "roughness",
            ControlKey::EnvMapIntensity => "envMapIntensity",
            ControlKey::Opacity => "opacity",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Slider caption: the camelCase name split into lowercase words.
    pub fn label(self) -> String {
        let mut out = String::with_capacity(self.name().len() + 4);
        for ch in self.name().chars() {
            if ch.is_ascii_uppercase() {
                out.push(' ');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Whether changing this key requires the material to be re-applied.
    pub fn affects_material(self) -> bool {
        matches!(
            self,
            ControlKey::Transmission
                | ControlKey::Roughness
                | ControlKey::EnvMapIntensity
                | ControlKey::Opacity
        )
    }
}

pub const SLIDER_MIN: f32 = 0.0;
pub const SLIDER_MAX: f32 = 1.0;
pub const SLIDER_STEP: f32 = 0.01;

/// Live tuning values read by the deformer every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobControls {
    pub deformation_intensity: f32,
    pub animation_speed: f32,
    pub mouse_influence: f32,
    pub transmission: f32,
    pub roughness: f32,
    pub env_map_intensity: f32,
    pub opacity: f32,
}

impl Default for BlobControls {
    fn default() -> Self {
        Self {
            deformation_intensity: 0.3,
            animation_speed: 1.0,
            mouse_influence: 0.5,
            transmission: 0.95,
            roughness: 0.05,
            env_map_intensity: 1.2,
            opacity: 0.9,
        }
    }
}

impl BlobControls {
    pub fn get(&self, key: ControlKey) -> f32 {
        match key {
            ControlKey::DeformationIntensity => self.deformation_intensity,
            ControlKey::AnimationSpeed => self.animation_speed,
            ControlKey::MouseInfluence => self.mouse_influence,
            ControlKey::Transmission => self.transmission,
            ControlKey::Roughness => self.roughness,
            ControlKey::EnvMapIntensity => self.env_map_intensity,
            ControlKey::Opacity => self.opacity,
        }
    }

    /// Store a slider value, clamped to the slider range. Non-finite input is ignored.
    pub fn set(&mut self, key: ControlKey, value: f32) {
        if !value.is_finite() {
            log::warn!("[controls] ignoring non-finite {} = {}", key.name(), value);
            return;
        }
        let v = value.clamp(SLIDER_MIN, SLIDER_MAX);
        let slot = match key {
            ControlKey::DeformationIntensity => &mut self.deformation_intensity,
            ControlKey::AnimationSpeed => &mut self.animation_speed,
            ControlKey::MouseInfluence => &mut self.mouse_influence,
            ControlKey::Transmission => &mut self.transmission,
            ControlKey::Roughness => &mut self.roughness,
            ControlKey::EnvMapIntensity => &mut self.env_map_intensity,
            ControlKey::Opacity => &mut self.opacity,
        };
        *slot = v;
    }

    /// Parse a slider's string value and store it. Returns false if unparseable.
    pub fn set_from_str(&mut self, key: ControlKey, raw: &str) -> bool {
        match raw.trim().parse::<f32>() {
            Ok(v) if v.is_finite() => {
                self.set(key, v);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_split_camel_case() {
        assert_eq!(
            ControlKey::DeformationIntensity.label(),
            "deformation intensity"
        );
        assert_eq!(ControlKey::EnvMapIntensity.label(), "env map intensity");
        assert_eq!(ControlKey::Opacity.label(), "opacity");
    }

    #[test]
    fn names_round_trip() {
        for key in ControlKey::ALL {
            assert_eq!(ControlKey::from_name(key.name()), Some(key));
        }
        assert_eq!(ControlKey::from_name("speed"), None);
    }

    #[test]
    fn set_clamps_to_slider_range() {
        let mut c = BlobControls::default();
        c.set(ControlKey::AnimationSpeed, 3.0);
        assert_eq!(c.animation_speed, 1.0);
        c.set(ControlKey::Opacity, -0.5);
        assert_eq!(c.opacity, 0.0);
        c.set(ControlKey::Roughness, f32::NAN);
        assert_eq!(c.roughness, 0.05);
    }

    #[test]
    fn set_from_str_parses_slider_values() {
        let mut c = BlobControls::default();
        assert!(c.set_from_str(ControlKey::MouseInfluence, "0.25"));
        assert_eq!(c.mouse_influence, 0.25);
        assert!(!c.set_from_str(ControlKey::MouseInfluence, "abc"));
        assert_eq!(c.mouse_influence, 0.25);
    }

    #[test]
    fn defaults_keep_env_intensity_above_slider_max() {
        assert_eq!(BlobControls::default().env_map_intensity, 1.2);
    }
}
