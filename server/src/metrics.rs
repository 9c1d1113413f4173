use prometheus_client::encoding::text::encode;
use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::registry::Registry;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ReadRequest {
    pub resource: String,
    pub success: u32,
}

pub struct MetricsClient {
    registry: Registry,
    github_read_requests: Family<ReadRequest, Counter>,
}

impl Default for MetricsClient {
    fn default() -> Self {
        let mut registry = Registry::default();
        let github_read_requests = Family::default();

        registry.register(
            "github_api_read_requests",
            "Outbound GitHub read requests by resource and outcome",
            github_read_requests.clone(),
        );

        Self {
            registry,
            github_read_requests,
        }
    }
}

impl MetricsClient {
    pub fn add_read_request(&self, resource: &str, success: bool) {
        self.github_read_requests
            .get_or_create(&ReadRequest {
                resource: resource.to_string(),
                success: success as u32,
            })
            .inc();
    }

    pub fn encode(&self) -> anyhow::Result<String> {
        let mut body = String::new();
        encode(&mut body, &self.registry)?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_requests_show_up_in_the_exposition() {
        let metrics = MetricsClient::default();
        metrics.add_read_request("profile", true);
        metrics.add_read_request("repos", false);

        let body = metrics.encode().unwrap();
        assert!(body.contains("github_api_read_requests"));
        assert!(body.contains("resource=\"profile\""));
    }
}
