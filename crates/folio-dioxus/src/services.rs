use folio_client::{
    BlogClient, ClientError, CodeforcesClient, RecommendationsClient, ReqwestTransport, Transport,
    VisitReporter,
};
use folio_config::ApiConfig;
use std::sync::Arc;
use std::time::Duration;

/// Remote clients shared with every view through the Dioxus context
#[derive(Clone)]
pub struct Services {
    pub blog: Arc<BlogClient>,
    pub recommendations: Arc<RecommendationsClient>,
    pub codeforces: Arc<CodeforcesClient>,
    pub visits: Arc<VisitReporter>,
}

impl Services {
    pub fn connect(api: &ApiConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(Duration::from_secs(api.timeout_secs))?;
        Ok(Self::with_transport(Arc::new(transport), api))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, api: &ApiConfig) -> Self {
        Self {
            blog: Arc::new(BlogClient::new(transport.clone(), &api.blog_url)),
            recommendations: Arc::new(RecommendationsClient::new(
                transport.clone(),
                &api.recommendations_url,
            )),
            codeforces: Arc::new(CodeforcesClient::new(
                transport.clone(),
                &api.codeforces_url,
                &api.codeforces_handle,
            )),
            visits: Arc::new(VisitReporter::new(transport, &api.visitor_url)),
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.blog, &other.blog)
    }
}
