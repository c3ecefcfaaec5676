use super::constants::{LOW_END_MAX_CONCURRENCY, LOW_END_MAX_MEMORY_GB, MOBILE_UA_TOKENS};

/// Environment signals read once at load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceProfile {
    pub user_agent: String,
    pub hardware_concurrency: Option<u32>,
    /// `navigator.deviceMemory` in GB; absent on most non-Chromium browsers.
    pub device_memory: Option<f64>,
    pub prefers_reduced_motion: bool,
}

/// Groups of effects that share one gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectGroup {
    Cursor,
    ProjectTilt,
    HeroParallax,
    Magnetic,
    AboutSection,
    LongTaskMonitor,
}

impl DeviceProfile {
    pub fn is_mobile(&self) -> bool {
        let ua = self.user_agent.to_ascii_lowercase();
        MOBILE_UA_TOKENS.iter().any(|token| ua.contains(token))
    }

    /// Absent hints never count against the device.
    pub fn is_low_end(&self) -> bool {
        self.hardware_concurrency
            .is_some_and(|n| n <= LOW_END_MAX_CONCURRENCY)
            || self
                .device_memory
                .is_some_and(|gb| gb <= LOW_END_MAX_MEMORY_GB)
            || self.is_mobile()
    }

    /// Animated elements are forced to their final state instead of animating.
    pub fn degraded(&self) -> bool {
        self.is_low_end() || self.prefers_reduced_motion
    }

    pub fn allows(&self, group: EffectGroup) -> bool {
        let mobile = self.is_mobile();
        let low_end = self.is_low_end();
        let reduced = self.prefers_reduced_motion;
        match group {
            // Frame-driven pointer effects never run on a degraded device.
            EffectGroup::Cursor
            | EffectGroup::AboutSection
            | EffectGroup::ProjectTilt
            | EffectGroup::Magnetic => !mobile && !low_end && !reduced,
            EffectGroup::HeroParallax => !low_end && !reduced,
            EffectGroup::LongTaskMonitor => !low_end,
        }
    }
}
