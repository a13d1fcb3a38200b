//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;

/// Resource type tag stored in `task_pdfs.resource_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ResourceType {
    /// `video`
    #[sea_orm(string_value = "video")]
    Video,
    /// `audio`
    #[sea_orm(string_value = "audio")]
    Audio,
    /// `speaking`
    #[sea_orm(string_value = "speaking")]
    Speaking,
    /// `writing`
    #[sea_orm(string_value = "writing")]
    Writing,
    /// `reading`
    #[sea_orm(string_value = "reading")]
    Reading,
    /// `story`
    #[sea_orm(string_value = "story")]
    Story,
    /// `blog`
    #[sea_orm(string_value = "blog")]
    Blog,
    /// `esl_video`
    #[sea_orm(string_value = "esl_video")]
    EslVideo,
    /// `esl_audio`
    #[sea_orm(string_value = "esl_audio")]
    EslAudio,
}
