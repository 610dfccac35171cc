use crate::HashMap;
use serde::{Serialize, Serializer};

impl Serialize for HashMap {
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        serializer.collect_map(self.dump().iter())
    }
}
