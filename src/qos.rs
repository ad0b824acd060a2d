//! UMTS QoS class attributes

use serde::Serialize;

use crate::params::QosClass;

/// Descriptive traffic requirements of a QoS class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QosDescriptor {
    #[serde(rename = "Latency")]
    pub latency: &'static str,
    #[serde(rename = "Data Rate")]
    pub data_rate: &'static str,
}

/// Look up the fixed descriptor of a class
pub fn lookup(class: QosClass) -> QosDescriptor {
    let (latency, data_rate) = match class {
        QosClass::Conversational => ("Very Low", "Medium"),
        QosClass::Streaming => ("Low", "High"),
        QosClass::Interactive => ("Medium", "Medium"),
        QosClass::Background => ("High", "Low"),
    };

    QosDescriptor { latency, data_rate }
}
