use crate::config::KafkaGitopsConfig;
use anyhow::{Context, Result};
use rdkafka::admin::AdminClient;
use rdkafka::client::DefaultClientContext;
use rdkafka::ClientConfig;

pub fn client_config(config: &KafkaGitopsConfig) -> ClientConfig {
    let mut client_config = ClientConfig::new();
    for (key, value) in config.iter() {
        client_config.set(key, value);
    }
    client_config
}

/// Creates the admin client the management commands run against. Does not
/// contact the brokers; connection errors surface on the first operation.
pub fn admin_client(config: &KafkaGitopsConfig) -> Result<AdminClient<DefaultClientContext>> {
    client_config(config)
        .create()
        .context("Failed to create Kafka admin client")
}

#[cfg(test)]
mod tests {
    use super::client_config;
    use crate::config::load_from;

    #[test]
    fn every_config_entry_is_copied_into_the_client_config() {
        let config = load_from(vec![
            ("KAFKA_BOOTSTRAP_SERVERS".to_string(), "broker:9093".to_string()),
            ("KAFKA_ACKS".to_string(), "all".to_string()),
        ])
        .unwrap();

        let client_config = client_config(&config);

        assert_eq!(client_config.get("bootstrap.servers"), Some("broker:9093"));
        assert_eq!(client_config.get("client.id"), Some("kafka-gitops"));
        assert_eq!(client_config.get("acks"), Some("all"));
    }
}
