// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_json::json;
use storagegateway_wkt::Timestamp;
type Result = anyhow::Result<()>;

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Helper {
    pub created_date: Option<Timestamp>,
}

#[test]
fn access() {
    let ts = Timestamp::default();
    assert_eq!(ts.nanos(), 0);
    assert_eq!(ts.seconds(), 0);
}

#[test]
fn serialize_in_struct() -> Result {
    let json = serde_json::to_value(Helper::default())?;
    assert_eq!(json, json!({}));

    let input = Helper {
        created_date: Some(Timestamp::new(1_600_000_000, 0)?),
    };
    let json = serde_json::to_value(input)?;
    assert_eq!(json, json!({ "CreatedDate": 1_600_000_000 }));

    let input = Helper {
        created_date: Some(Timestamp::new(12, 250_000_000)?),
    };
    let json = serde_json::to_value(input)?;
    assert_eq!(json, json!({ "CreatedDate": 12.25 }));
    Ok(())
}

#[test]
fn deserialize_in_struct() -> Result {
    let got = serde_json::from_value::<Helper>(json!({}))?;
    assert_eq!(got, Helper::default());

    let got = serde_json::from_value::<Helper>(json!({ "CreatedDate": 1_600_000_000 }))?;
    assert_eq!(got.created_date, Some(Timestamp::new(1_600_000_000, 0)?));

    let got = serde_json::from_value::<Helper>(json!({ "CreatedDate": -0.25 }))?;
    assert_eq!(got.created_date, Some(Timestamp::new(-1, 750_000_000)?));

    let got = serde_json::from_value::<Helper>(json!({ "CreatedDate": "1970-01-01T00:00:12.5Z" }))?;
    assert_eq!(got.created_date, Some(Timestamp::new(12, 500_000_000)?));
    Ok(())
}

#[test]
fn deserialize_errors() {
    let got = serde_json::from_value::<Helper>(json!({ "CreatedDate": "not a date" }));
    assert!(got.is_err(), "{got:?}");
    let got = serde_json::from_value::<Helper>(json!({ "CreatedDate": [1, 2] }));
    assert!(got.is_err(), "{got:?}");
}

#[test]
fn display() -> Result {
    let ts = Timestamp::new(0, 0)?;
    assert_eq!(ts.to_string(), "1970-01-01T00:00:00Z");
    Ok(())
}
