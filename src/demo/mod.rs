//! Illustrative rows for demo mode.
//!
//! Only served when demo mode is switched on, and always shown under a
//! "Demo data" badge.

use crate::models::{
    Activity, AppVersion, Company, Notification, NotificationSchedule, Subscription, User,
};

const COMPANIES: [&str; 8] = [
    "Acme Corp",
    "Globex",
    "Initech",
    "Umbrella Health",
    "Stark Logistics",
    "Wayne Foods",
    "Hooli",
    "Vandelay Imports",
];
const PLANS: [&str; 3] = ["starter", "business", "enterprise"];
const CHANNELS: [&str; 3] = ["email", "push", "sms"];

fn day(i: usize) -> String {
    format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1)
}

pub(crate) fn companies() -> Vec<Company> {
    COMPANIES
        .iter()
        .enumerate()
        .map(|(i, name)| Company {
            id: format!("demo-company-{}", i + 1),
            name: name.to_string(),
            domain: format!("{}.example", name.split(' ').next().unwrap_or(*name).to_lowercase()),
            plan: PLANS[i % PLANS.len()].to_string(),
            status: if i % 4 == 3 { "suspended" } else { "active" }.to_string(),
            user_count: Some((5 + i * 7) as f64),
            created_at: day(i * 3),
        })
        .collect()
}

pub(crate) fn users() -> Vec<User> {
    (1..=37)
        .map(|i| {
            let company = COMPANIES[i % COMPANIES.len()];
            User {
                id: format!("demo-user-{i}"),
                name: format!("Demo User {i}"),
                email: format!("user{i}@{}.example", company.split(' ').next().unwrap_or(company).to_lowercase()),
                role: if i % 6 == 0 { "admin" } else { "member" }.to_string(),
                company_name: company.to_string(),
                status: if i % 9 == 0 { "invited" } else { "active" }.to_string(),
                last_login_at: if i % 9 == 0 {
                    String::new()
                } else {
                    format!("{}T{:02}:15:00Z", day(i * 2), i % 24)
                },
                created_at: day(i),
            }
        })
        .collect()
}

pub(crate) fn subscriptions() -> Vec<Subscription> {
    COMPANIES
        .iter()
        .enumerate()
        .flat_map(|(i, company)| {
            (0..3).map(move |k| {
                let n = i * 3 + k;
                let plan = PLANS[(i + k) % PLANS.len()];
                Subscription {
                    id: format!("demo-sub-{}", n + 1),
                    company_name: company.to_string(),
                    plan: plan.to_string(),
                    status: match n % 5 {
                        0 => "cancelled",
                        1 => "trialing",
                        _ => "active",
                    }
                    .to_string(),
                    amount: Some(match plan {
                        "starter" => 29.0,
                        "business" => 99.0,
                        _ => 499.0,
                    }),
                    currency: "USD".to_string(),
                    start_date: day(n),
                    end_date: day(n + 12),
                }
            })
        })
        .collect()
}

pub(crate) fn app_versions() -> Vec<AppVersion> {
    (0..14)
        .map(|i| {
            let platform = if i % 2 == 0 { "ios" } else { "android" };
            AppVersion {
                id: format!("demo-version-{}", i + 1),
                version: format!("3.{}.{}", i / 4, i % 4),
                platform: platform.to_string(),
                build_number: Some((300 + i * 3) as f64),
                is_mandatory: i % 5 == 0,
                release_date: day(i * 2),
                notes: format!("Bug fixes and performance improvements ({platform})"),
            }
        })
        .collect()
}

pub(crate) fn activities() -> Vec<Activity> {
    const ACTIONS: [&str; 4] = ["login", "create", "update", "delete"];
    const RESOURCES: [&str; 4] = ["company", "user", "subscription", "notification"];
    (1..=53)
        .map(|i| Activity {
            id: format!("demo-activity-{i}"),
            user_email: format!("user{}@acme.example", i % 7 + 1),
            action: ACTIONS[i % ACTIONS.len()].to_string(),
            resource: RESOURCES[(i / 2) % RESOURCES.len()].to_string(),
            ip_address: format!("10.0.{}.{}", i % 4, i),
            created_at: format!("{}T{:02}:{:02}:00Z", day(i), i % 24, (i * 7) % 60),
        })
        .collect()
}

pub(crate) fn notifications() -> Vec<Notification> {
    (1..=22)
        .map(|i| Notification {
            id: format!("demo-notification-{i}"),
            title: format!("Release announcement #{i}"),
            channel: CHANNELS[i % CHANNELS.len()].to_string(),
            status: if i % 4 == 0 { "failed" } else { "sent" }.to_string(),
            recipients: Some((i * 40) as f64),
            sent_at: format!("{}T09:00:00Z", day(i)),
        })
        .collect()
}

pub(crate) fn notification_schedules() -> Vec<NotificationSchedule> {
    [
        ("Weekly digest", "0 9 * * MON"),
        ("Trial ending reminder", "0 10 * * *"),
        ("Invoice due", "0 8 1 * *"),
        ("Inactive user nudge", "0 18 * * FRI"),
        ("Quarterly report", "0 7 1 */3 *"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (name, cron))| NotificationSchedule {
        id: format!("demo-schedule-{}", i + 1),
        name: name.to_string(),
        channel: CHANNELS[i % CHANNELS.len()].to_string(),
        cron: cron.to_string(),
        status: if i == 3 { "paused" } else { "active" }.to_string(),
        next_run_at: format!("{}T{:02}:00:00Z", day(i + 20), 8 + i),
    })
    .collect()
}
