use crate::list::record::{FieldValue, Record};
use serde::{Deserialize, Deserializer, Serialize};

/// Backend account info object.
///
/// Returned by the login endpoint; kept opaque so backend field changes don't break us.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct AccountInfo {
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl AccountInfo {
    pub fn display_name(&self) -> String {
        ["name", "email", "username"]
            .iter()
            .find_map(|k| self.extra.get(*k).and_then(|v| v.as_str()))
            .unwrap_or("Admin")
            .to_string()
    }
}

/// Ids arrive as strings or numbers, under `id` or `_id`.
fn deserialize_id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// `null` reads as empty; numbers and booleans are shown as written.
fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// A number or a numeric string; anything else is `None`.
fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match serde_json::Value::deserialize(d)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match serde_json::Value::deserialize(d)? {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => matches!(s.trim(), "true" | "1" | "yes"),
        _ => false,
    })
}

/// Folds `_id` into `id` so a row carrying both deserializes.
///
/// `id` wins unless it is absent or `null`.
pub(crate) fn normalize_id(item: &mut serde_json::Value) {
    let Some(map) = item.as_object_mut() else {
        return;
    };
    let Some(alt) = map.remove("_id") else {
        return;
    };
    if map.get("id").map_or(true, serde_json::Value::is_null) {
        map.insert("id".to_string(), alt);
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Activity {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "userEmail", deserialize_with = "lenient_text")]
    pub user_email: String,
    #[serde(deserialize_with = "lenient_text")]
    pub action: String,
    #[serde(deserialize_with = "lenient_text")]
    pub resource: String,
    #[serde(alias = "ipAddress", deserialize_with = "lenient_text")]
    pub ip_address: String,
    #[serde(alias = "createdAt", deserialize_with = "lenient_text")]
    pub created_at: String,
}

impl Record for Activity {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "user_email" => FieldValue::opt_text(Some(&self.user_email)),
            "action" => FieldValue::opt_text(Some(&self.action)),
            "resource" => FieldValue::opt_text(Some(&self.resource)),
            "ip_address" => FieldValue::opt_text(Some(&self.ip_address)),
            "created_at" => FieldValue::opt_text(Some(&self.created_at)),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Company {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub domain: String,
    #[serde(deserialize_with = "lenient_text")]
    pub plan: String,
    #[serde(deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(alias = "userCount", deserialize_with = "lenient_number")]
    pub user_count: Option<f64>,
    #[serde(alias = "createdAt", deserialize_with = "lenient_text")]
    pub created_at: String,
}

impl Record for Company {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "name" => FieldValue::opt_text(Some(&self.name)),
            "domain" => FieldValue::opt_text(Some(&self.domain)),
            "plan" => FieldValue::opt_text(Some(&self.plan)),
            "status" => FieldValue::opt_text(Some(&self.status)),
            "user_count" => FieldValue::opt_number(self.user_count),
            "created_at" => FieldValue::opt_text(Some(&self.created_at)),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct User {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(deserialize_with = "lenient_text")]
    pub role: String,
    #[serde(alias = "companyName", deserialize_with = "lenient_text")]
    pub company_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(alias = "lastLoginAt", deserialize_with = "lenient_text")]
    pub last_login_at: String,
    #[serde(alias = "createdAt", deserialize_with = "lenient_text")]
    pub created_at: String,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "name" => FieldValue::opt_text(Some(&self.name)),
            "email" => FieldValue::opt_text(Some(&self.email)),
            "role" => FieldValue::opt_text(Some(&self.role)),
            "company_name" => FieldValue::opt_text(Some(&self.company_name)),
            "status" => FieldValue::opt_text(Some(&self.status)),
            "last_login_at" => FieldValue::opt_text(Some(&self.last_login_at)),
            "created_at" => FieldValue::opt_text(Some(&self.created_at)),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Subscription {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "companyName", deserialize_with = "lenient_text")]
    pub company_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub plan: String,
    #[serde(deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(deserialize_with = "lenient_number")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "lenient_text")]
    pub currency: String,
    #[serde(alias = "startDate", deserialize_with = "lenient_text")]
    pub start_date: String,
    #[serde(alias = "endDate", deserialize_with = "lenient_text")]
    pub end_date: String,
}

impl Record for Subscription {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "company_name" => FieldValue::opt_text(Some(&self.company_name)),
            "plan" => FieldValue::opt_text(Some(&self.plan)),
            "status" => FieldValue::opt_text(Some(&self.status)),
            "amount" => FieldValue::opt_number(self.amount),
            "currency" => FieldValue::opt_text(Some(&self.currency)),
            "start_date" => FieldValue::opt_text(Some(&self.start_date)),
            "end_date" => FieldValue::opt_text(Some(&self.end_date)),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct AppVersion {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub version: String,
    #[serde(deserialize_with = "lenient_text")]
    pub platform: String,
    #[serde(alias = "buildNumber", deserialize_with = "lenient_number")]
    pub build_number: Option<f64>,
    #[serde(alias = "isMandatory", alias = "force_update", deserialize_with = "lenient_bool")]
    pub is_mandatory: bool,
    #[serde(alias = "releaseDate", deserialize_with = "lenient_text")]
    pub release_date: String,
    #[serde(alias = "releaseNotes", deserialize_with = "lenient_text")]
    pub notes: String,
}

impl Record for AppVersion {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "version" => FieldValue::opt_text(Some(&self.version)),
            "platform" => FieldValue::opt_text(Some(&self.platform)),
            "build_number" => FieldValue::opt_number(self.build_number),
            "is_mandatory" => FieldValue::text(if self.is_mandatory { "yes" } else { "no" }),
            "release_date" => FieldValue::opt_text(Some(&self.release_date)),
            "notes" => FieldValue::opt_text(Some(&self.notes)),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Notification {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub channel: String,
    #[serde(deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(deserialize_with = "lenient_number")]
    pub recipients: Option<f64>,
    #[serde(alias = "sentAt", deserialize_with = "lenient_text")]
    pub sent_at: String,
}

impl Record for Notification {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "title" => FieldValue::opt_text(Some(&self.title)),
            "channel" => FieldValue::opt_text(Some(&self.channel)),
            "status" => FieldValue::opt_text(Some(&self.status)),
            "recipients" => FieldValue::opt_number(self.recipients),
            "sent_at" => FieldValue::opt_text(Some(&self.sent_at)),
            _ => FieldValue::Missing,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct NotificationSchedule {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub channel: String,
    /// Cron expression, shown verbatim.
    #[serde(deserialize_with = "lenient_text")]
    pub cron: String,
    #[serde(deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(alias = "nextRunAt", deserialize_with = "lenient_text")]
    pub next_run_at: String,
}

impl Record for NotificationSchedule {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "name" => FieldValue::opt_text(Some(&self.name)),
            "channel" => FieldValue::opt_text(Some(&self.channel)),
            "cron" => FieldValue::opt_text(Some(&self.cron)),
            "status" => FieldValue::opt_text(Some(&self.status)),
            "next_run_at" => FieldValue::opt_text(Some(&self.next_run_at)),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_number_and_underscore_alias() {
        let c: Company = serde_json::from_str(r#"{"_id": 12, "name": "Acme"}"#).expect("parse");
        assert_eq!(c.id, "12");
        let c: Company = serde_json::from_str(r#"{"id": "c-1"}"#).expect("parse");
        assert_eq!(c.id, "c-1");
        let c: Company = serde_json::from_str(r#"{"name": "No id"}"#).expect("parse");
        assert!(c.id.is_empty());
    }

    #[test]
    fn test_camel_case_aliases() {
        let s: Subscription = serde_json::from_str(
            r#"{"id":"s1","companyName":"Acme","startDate":"2024-01-01","amount":49}"#,
        )
        .expect("parse");
        assert_eq!(s.company_name, "Acme");
        assert_eq!(s.start_date, "2024-01-01");
        assert_eq!(s.field("amount"), FieldValue::Number(49.0));
        assert_eq!(s.field("end_date"), FieldValue::Missing);
    }

    #[test]
    fn test_null_and_stringly_fields() {
        let u: User = serde_json::from_str(
            r#"{"id":"u1","name":null,"lastLoginAt":null,"role":"admin"}"#,
        )
        .expect("parse");
        assert_eq!(u.last_login_at, "");
        assert_eq!(u.field("last_login_at"), FieldValue::Missing);
        assert_eq!(u.role, "admin");

        let c: Company =
            serde_json::from_str(r#"{"id":"c1","userCount":"12","plan":null}"#).expect("parse");
        assert_eq!(c.user_count, Some(12.0));
        let c: Company =
            serde_json::from_str(r#"{"id":"c2","userCount":"lots"}"#).expect("parse");
        assert_eq!(c.user_count, None);

        let v: AppVersion =
            serde_json::from_str(r#"{"id":"v1","isMandatory":null,"buildNumber":"42"}"#)
                .expect("parse");
        assert!(!v.is_mandatory);
        assert_eq!(v.build_number, Some(42.0));
    }

    #[test]
    fn test_normalize_id_folds_underscore_id() {
        let mut both = serde_json::json!({"id": "c1", "_id": "mongo-1", "name": "Acme"});
        normalize_id(&mut both);
        let c: Company = serde_json::from_value(both).expect("parse");
        assert_eq!(c.id, "c1");

        let mut null_id = serde_json::json!({"id": null, "_id": 7});
        normalize_id(&mut null_id);
        let c: Company = serde_json::from_value(null_id).expect("parse");
        assert_eq!(c.id, "7");
    }

    #[test]
    fn test_record_fields() {
        let v = AppVersion {
            id: "v1".to_string(),
            version: "2.3.0".to_string(),
            is_mandatory: true,
            ..Default::default()
        };
        assert_eq!(v.field("is_mandatory"), FieldValue::text("yes"));
        assert_eq!(v.field("build_number"), FieldValue::Missing);
        assert_eq!(v.field("unknown"), FieldValue::Missing);
    }

    #[test]
    fn test_account_display_name() {
        let a = AccountInfo {
            extra: serde_json::json!({"email": "ops@example.com"}),
        };
        assert_eq!(a.display_name(), "ops@example.com");
        let a = AccountInfo {
            extra: serde_json::json!({}),
        };
        assert_eq!(a.display_name(), "Admin");
    }
}
