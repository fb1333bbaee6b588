//
//  hangar-cli
//  api/resources/provider.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/21.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Infrastructure link records referenced by deploys. Plain data, no entity
//! behavior.

use serde::{Deserialize, Serialize};

/// A hosting region within a provider.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Region name, for example `us-east-1`.
    pub name: String,
}

/// An infrastructure provider and the regions it offers.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Provider {
    /// Provider name.
    pub name: String,

    /// Regions available with this provider.
    #[serde(default)]
    pub regions: Vec<Region>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_with_regions() {
        let provider: Provider = serde_json::from_str(
            r#"{"name":"aws","regions":[{"name":"us-east-1"},{"name":"eu-west-1"}]}"#,
        )
        .unwrap();
        assert_eq!(provider.name, "aws");
        assert_eq!(provider.regions[1].name, "eu-west-1");
    }
}
