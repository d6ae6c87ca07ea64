//! Motion configuration types for the scrollweave engine.
//!
//! Each animation feature has its own config struct with all its
//! parameters. All configs are grouped in `MotionConfig`, the settings
//! surface the host hands to the engine at startup.

use std::time::Duration;

use crate::core::easing::Easing;

/// Macro for defining motion config structs with Default implementations.
macro_rules! motion_config {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($field:ident : $ty:ty = $default:expr),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            $(pub $field: $ty),*
        }
        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default),*
                }
            }
        }
    };
}

motion_config!(
    /// Configuration for full-span parallax bindings.
    ParallaxConfig {
        speed: f32 = 0.5,
        pixels_per_unit: f32 = 100.0,
    }
);

motion_config!(
    /// Configuration for the layered parallax background.
    BackgroundLayersConfig {
        layer_speeds: [f32; 4] = [0.2, 0.4, 0.6, 0.8],
        layer_opacities: [f32; 4] = [0.05, 0.08, 0.1, 0.05],
        layer_shape_counts: [u32; 4] = [3, 5, 8, 12],
        layer_height: f32 = 960.0,
    }
);

motion_config!(
    /// Configuration for viewport-entry reveals.
    RevealConfig {
        offset_y: f32 = 50.0,
        duration: Duration = Duration::from_secs(1),
        easing: Easing = Easing::EaseOutQuad,
        threshold: f32 = 0.8,
        once: bool = false,
        stagger: Duration = Duration::ZERO,
    }
);

motion_config!(
    /// Configuration for the landing view's intro and exit.
    LandingConfig {
        title_offset_y: f32 = 100.0,
        title_scale: f32 = 0.8,
        title_duration: Duration = Duration::from_millis(1500),
        subtitle_offset_y: f32 = 50.0,
        subtitle_duration: Duration = Duration::from_millis(1200),
        subtitle_overlap: Duration = Duration::from_millis(800),
        exit_scale: f32 = 1.1,
        exit_duration: Duration = Duration::from_millis(800),
    }
);

motion_config!(
    /// Configuration for the seeded floating-element field.
    FloatingFieldConfig {
        count: usize = 20,
        min_size: f32 = 10.0,
        max_size: f32 = 30.0,
        min_opacity: f32 = 0.1,
        max_opacity: f32 = 0.4,
        loop_travel: f32 = 50.0,
        min_loop_secs: f32 = 5.0,
        max_loop_secs: f32 = 15.0,
        drift: f32 = 100.0,
        min_scrub_lag: f32 = 1.0,
        max_scrub_lag: f32 = 3.0,
    }
);

motion_config!(
    /// Configuration for the landing particle burst.
    ParticleBurstConfig {
        count: usize = 50,
        min_size: f32 = 1.0,
        max_size: f32 = 5.0,
        min_opacity: f32 = 0.2,
        max_opacity: f32 = 1.0,
        rise: f32 = 100.0,
        drift: f32 = 100.0,
        min_cycle_secs: f32 = 2.0,
        max_cycle_secs: f32 = 5.0,
        max_delay_secs: f32 = 2.0,
    }
);

motion_config!(
    /// Configuration for the custom cursor.
    CursorConfig {
        follow: f32 = 0.15,
        ring_offset: f32 = -20.0,
        dot_offset: f32 = -2.0,
        hover_scale: f32 = 1.5,
        hover_duration: Duration = Duration::from_millis(300),
        hover_easing: Easing = Easing::EaseOutQuad,
    }
);

motion_config!(
    /// Configuration for background audio playback.
    AudioConfig {
        autoplay: bool = true,
        looped: bool = true,
        volume: f32 = 0.3,
        start_muted: bool = false,
    }
);

/// Container for all motion configurations.
#[derive(Clone, Debug, Default)]
pub struct MotionConfig {
    pub parallax: ParallaxConfig,
    pub background_layers: BackgroundLayersConfig,
    pub reveal: RevealConfig,
    pub landing: LandingConfig,
    pub floating_field: FloatingFieldConfig,
    pub particle_burst: ParticleBurstConfig,
    pub cursor: CursorConfig,
    pub audio: AudioConfig,
}
