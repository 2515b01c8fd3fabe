pub use crate::core::bus::{Bus, Update};
pub use crate::core::map::{BoundingBox, MapPoint};
pub use crate::core::query::{Criteria, StatusFilter, TypeFilter};
pub use crate::core::registry::{Registry, Snapshot};
pub use crate::core::sensor::{Metrics, Position, Sensor, Status, Type as SensorType};
pub use chrono::prelude::*;
pub use chrono::Duration;
pub use log::{debug, error, info, warn};
pub use serde::{Deserialize, Serialize};
pub use std::sync::{Arc, Mutex};
pub use std::thread;

pub type Result<T = ()> = anyhow::Result<T>;
