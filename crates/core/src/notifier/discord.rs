//! Discord webhook notifier.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeDelta, Utc};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::selector::SelectedProblem;

use super::{Notifier, NotifierConfig, NotifyError};

const KST_OFFSET_SECS: i64 = 9 * 3600;

/// Posts the selection to a Discord channel through a webhook.
pub struct DiscordNotifier {
    client: Client,
    webhook_url: String,
    username: String,
    problem_base_url: String,
}

impl DiscordNotifier {
    /// Create a new Discord notifier. Fails without a webhook URL.
    pub fn new(config: NotifierConfig) -> Result<Self, NotifyError> {
        let webhook_url = config
            .webhook()
            .ok_or_else(|| NotifyError::NotConfigured("Discord webhook URL is required".into()))?
            .to_string();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()?;

        Ok(Self {
            client,
            webhook_url,
            username: config.username,
            problem_base_url: config.problem_base_url,
        })
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    username: &'a str,
    content: String,
}

#[async_trait]
impl Notifier for DiscordNotifier {
    fn name(&self) -> &str {
        "discord"
    }

    async fn notify(&self, problems: &[SelectedProblem]) -> Result<(), NotifyError> {
        let payload = WebhookPayload {
            username: &self.username,
            content: format_message(problems, kst_today(), &self.problem_base_url),
        };

        debug!(problems = problems.len(), "Posting to Discord webhook");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        info!(problems = problems.len(), "Discord message sent");
        Ok(())
    }
}

/// Today's date in Korea Standard Time.
pub fn kst_today() -> NaiveDate {
    (Utc::now() + TimeDelta::seconds(KST_OFFSET_SECS)).date_naive()
}

/// Render the message body: a dated header, then one numbered link per
/// problem in the given order.
pub fn format_message(problems: &[SelectedProblem], date: NaiveDate, base_url: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    let mut content = format!("📅 **{} 코딩테스트**\n", date.format("%Y-%m-%d"));

    for (idx, p) in problems.iter().enumerate() {
        content.push_str(&format!(
            "{}. [**[{}] {}**]({}/{})\n",
            idx + 1,
            p.id,
            p.title,
            base_url,
            p.id
        ));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(id: &str, title: &str) -> SelectedProblem {
        SelectedProblem {
            id: id.to_string(),
            title: title.to_string(),
            tier: "S2".to_string(),
            tag: "GREEDY".to_string(),
        }
    }

    #[test]
    fn test_format_message() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let problems = vec![problem("11047", "동전 0"), problem("1931", "회의실 배정")];

        let message = format_message(&problems, date, "https://www.acmicpc.net/problem/");
        assert_eq!(
            message,
            "📅 **2026-03-14 코딩테스트**\n\
             1. [**[11047] 동전 0**](https://www.acmicpc.net/problem/11047)\n\
             2. [**[1931] 회의실 배정**](https://www.acmicpc.net/problem/1931)\n"
        );
    }

    #[test]
    fn test_format_message_empty() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let message = format_message(&[], date, "https://www.acmicpc.net/problem");
        assert_eq!(message, "📅 **2026-01-01 코딩테스트**\n");
    }

    #[test]
    fn test_new_requires_webhook() {
        let result = DiscordNotifier::new(NotifierConfig::default());
        assert!(matches!(result, Err(NotifyError::NotConfigured(_))));
    }

    #[test]
    fn test_new_with_webhook() {
        let config = NotifierConfig {
            webhook_url: Some("https://discord.com/api/webhooks/1/abc".to_string()),
            ..NotifierConfig::default()
        };
        let notifier = DiscordNotifier::new(config).unwrap();
        assert_eq!(notifier.name(), "discord");
        assert_eq!(notifier.username, "Daily Baekjoon");
    }

    #[test]
    fn test_payload_shape() {
        let payload = WebhookPayload {
            username: "Daily Baekjoon",
            content: "hi".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["username"], "Daily Baekjoon");
        assert_eq!(json["content"], "hi");
    }

    #[test]
    fn test_kst_today_is_close_to_utc() {
        let utc = Utc::now().date_naive();
        let diff = (kst_today() - utc).num_days();
        assert!((0..=1).contains(&diff));
    }
}
