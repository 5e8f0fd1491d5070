//! Device-class detection for share targets.
//!
//! Only the messaging and photo-sharing channels care: on mobile they try an app
//! scheme first, on desktop they go straight to the web. Detection sits behind
//! [`DeviceDetector`] so tests can pin the class instead of sniffing a user agent.

use serde::{Deserialize, Serialize};

/// User-agent fragments that mark a mobile browser.
const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Case-insensitive user-agent sniff.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if MOBILE_MARKERS.iter().any(|m| ua.contains(m)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }
}

/// Capability check injected into the share layer.
pub trait DeviceDetector {
    fn device_class(&self) -> DeviceClass;
}

/// Detector backed by a user-agent string.
#[derive(Debug, Clone)]
pub struct UserAgentDetector {
    user_agent: String,
}

impl UserAgentDetector {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl DeviceDetector for UserAgentDetector {
    fn device_class(&self) -> DeviceClass {
        DeviceClass::from_user_agent(&self.user_agent)
    }
}

/// Detector that always answers the same class.
#[derive(Debug, Clone, Copy)]
pub struct FixedDevice(pub DeviceClass);

impl DeviceDetector for FixedDevice {
    fn device_class(&self) -> DeviceClass {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_common_mobile_agents() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
        let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Chrome/120.0 Mobile Safari/537.36";
        assert_eq!(DeviceClass::from_user_agent(iphone), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(android), DeviceClass::Mobile);
    }

    #[test]
    fn desktop_agents_are_desktop() {
        let firefox = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
        assert_eq!(DeviceClass::from_user_agent(firefox), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_user_agent(""), DeviceClass::Desktop);
    }

    #[test]
    fn fixed_detector_pins_class() {
        assert!(FixedDevice(DeviceClass::Mobile).device_class().is_mobile());
        assert!(!UserAgentDetector::new("curl/8.0").device_class().is_mobile());
    }
}
