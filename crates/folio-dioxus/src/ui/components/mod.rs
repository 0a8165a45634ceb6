pub mod article_body;
pub mod article_list;
pub mod article_view;
pub mod block_editor;
pub mod block_quote;
pub mod block_view;
pub mod callout;
pub mod code_fence;
pub mod delimiter;
pub mod embed_frame;
pub mod empty_document;
pub mod error_screen;
pub mod figure;
pub mod form_field;
pub mod heading;
pub mod link_card;
pub mod list_block;
pub mod load_status;
pub mod navigation_drawer;
pub mod paragraph;
pub mod profile;
pub mod publish_panel;
pub mod recommendation_form;
pub mod submit_notice;
pub mod swipe_surface;
pub mod table_block;
pub mod unknown_block;

pub use article_body::ArticleBody;
pub use article_list::{ArticleCard, ArticleList};
pub use article_view::ArticleView;
pub use block_editor::BlockEditor;
pub use block_quote::BlockQuote;
pub use block_view::BlockView;
pub use callout::Callout;
pub use code_fence::CodeFence;
pub use delimiter::Delimiter;
pub use embed_frame::EmbedFrame;
pub use empty_document::EmptyDocument;
pub use error_screen::ErrorScreen;
pub use figure::Figure;
pub use form_field::FormField;
pub use heading::Heading;
pub use link_card::LinkCard;
pub use list_block::ListBlock;
pub use load_status::LoadStatus;
pub use navigation_drawer::NavigationDrawer;
pub use paragraph::Paragraph;
pub use profile::Profile;
pub use publish_panel::PublishPanel;
pub use recommendation_form::RecommendationForm;
pub use submit_notice::SubmitNotice;
pub use swipe_surface::SwipeSurface;
pub use table_block::TableBlock;
pub use unknown_block::UnknownBlock;
