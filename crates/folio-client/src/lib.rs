//! Async clients for the remote services behind the portfolio: the blog
//! API, recommendations, visit statistics and the Codeforces profile.
//!
//! Every client talks through a shared [`Transport`]; results feed the UI as
//! [`LoadState`]s.

pub mod blog;
pub mod codeforces;
pub mod error;
pub mod recommendations;
pub mod state;
pub mod statistics;
pub mod transport;
mod wire;

pub use blog::{Article, BlogClient, NewArticle, slugify};
pub use codeforces::{CodeforcesClient, ContestStats, Rank, summarize};
pub use error::{ClientError, ValidationError};
pub use recommendations::{NewRecommendation, Recommendation, RecommendationsClient, format_date};
pub use state::{LoadState, SubmitState};
pub use statistics::VisitReporter;
pub use transport::{HttpResponse, ReqwestTransport, Transport};
