//! Subcommands that map one-to-one onto client endpoints.

use clap::Subcommand;
use medium_api::{FeedMode, MediumClient, Reply, Result};
use serde_json::Value;

#[derive(Debug, Subcommand)]
pub enum ApiCommand {
    /// Users: ids, profiles, followers, articles
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Articles: metadata, content, responses, fans
    Article {
        #[command(subcommand)]
        action: ArticleAction,
    },
    /// Publications
    Publication {
        #[command(subcommand)]
        action: PublicationAction,
    },
    /// Tags, topics and feeds
    Tag {
        #[command(subcommand)]
        action: TagAction,
    },
    /// Reading lists
    List {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Search users, articles, publications, lists or tags
    Search {
        #[command(subcommand)]
        action: SearchAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserAction {
    /// Resolve a username to a user id
    Id { username: String },
    Info { user_id: String },
    Articles {
        user_id: String,
        /// Continue after this article id
        #[arg(long)]
        after: Option<String>,
    },
    TopArticles { user_id: String },
    Followers {
        user_id: String,
        #[arg(long)]
        count: Option<u32>,
        /// Continue after this follower id
        #[arg(long)]
        after: Option<String>,
    },
    Following {
        user_id: String,
        #[arg(long)]
        count: Option<u32>,
    },
    Interests { user_id: String },
    Lists { user_id: String },
    Publications { user_id: String },
    Books { user_id: String },
    /// Check whether a user follows another user or publication
    IsFollowing { user_id: String, target_id: String },
}

#[derive(Debug, Subcommand)]
pub enum ArticleAction {
    Info { article_id: String },
    /// Plain-text content
    Content { article_id: String },
    Markdown { article_id: String },
    Html {
        article_id: String,
        /// Return a standalone HTML document
        #[arg(long)]
        fullpage: bool,
    },
    Assets { article_id: String },
    Responses { article_id: String },
    Fans { article_id: String },
    Related { article_id: String },
    Recommended { article_id: String },
    /// Fetch article info from its public URL
    ByUrl { url: String },
}

#[derive(Debug, Subcommand)]
pub enum PublicationAction {
    /// Resolve a publication slug to its id
    Id { slug: String },
    Info { publication_id: String },
    Articles {
        publication_id: String,
        /// Only articles published before this timestamp (YYYY-MM-DDTHH:MM:SS)
        #[arg(long)]
        from: Option<String>,
    },
    Newsletter { publication_id: String },
    Editors { publication_id: String },
}

#[derive(Debug, Subcommand)]
pub enum TagAction {
    Info { tag: String },
    Related { tag: String },
    /// Top-level tags
    Root,
    TopWriters {
        topic: String,
        #[arg(long)]
        count: Option<u32>,
    },
    Latest { topic: String },
    TopFeeds {
        tag: String,
        #[arg(long, default_value_t = FeedMode::Hot)]
        mode: FeedMode,
        #[arg(long)]
        after: Option<u32>,
        #[arg(long)]
        count: Option<u32>,
    },
    Recommended {
        tag: String,
        #[arg(long)]
        page: Option<u32>,
    },
    RecommendedUsers { tag: String },
    Archived {
        tag: String,
        #[arg(long)]
        year: Option<u16>,
        #[arg(long)]
        month: Option<u8>,
        /// Cursor from a previous archived-articles response
        #[arg(long)]
        next: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ListAction {
    Info { list_id: String },
    Articles { list_id: String },
    Responses { list_id: String },
}

#[derive(Debug, Subcommand)]
pub enum SearchAction {
    Users { query: String },
    Articles { query: String },
    Publications { query: String },
    Lists { query: String },
    Tags { query: String },
}

/// Run one API command. Projected string fields come back as JSON strings.
pub async fn execute(client: &MediumClient, command: ApiCommand) -> Result<Reply> {
    match command {
        ApiCommand::User { action } => user(client, action).await,
        ApiCommand::Article { action } => article(client, action).await,
        ApiCommand::Publication { action } => publication(client, action).await,
        ApiCommand::Tag { action } => tag(client, action).await,
        ApiCommand::List { action } => list(client, action).await,
        ApiCommand::Search { action } => search(client, action).await,
    }
}

fn text(reply: Reply<String>) -> Reply {
    reply.map(Value::String)
}

async fn user(client: &MediumClient, action: UserAction) -> Result<Reply> {
    match action {
        UserAction::Id { username } => client.get_user_id(&username).await.map(text),
        UserAction::Info { user_id } => client.get_user_info(&user_id).await,
        UserAction::Articles { user_id, after } => {
            client.get_user_articles(&user_id, after.as_deref()).await
        }
        UserAction::TopArticles { user_id } => client.get_user_top_articles(&user_id).await,
        UserAction::Followers { user_id, count, after } => {
            client.get_user_followers(&user_id, count, after.as_deref()).await
        }
        UserAction::Following { user_id, count } => {
            client.get_user_following(&user_id, count).await
        }
        UserAction::Interests { user_id } => client.get_user_interests(&user_id).await,
        UserAction::Lists { user_id } => client.get_user_lists(&user_id).await,
        UserAction::Publications { user_id } => client.get_user_publications(&user_id).await,
        UserAction::Books { user_id } => client.get_user_books(&user_id).await,
        UserAction::IsFollowing { user_id, target_id } => {
            client.is_user_following(&user_id, &target_id).await
        }
    }
}

async fn article(client: &MediumClient, action: ArticleAction) -> Result<Reply> {
    match action {
        ArticleAction::Info { article_id } => client.get_article_info(&article_id).await,
        ArticleAction::Content { article_id } => {
            client.get_article_content(&article_id).await.map(text)
        }
        ArticleAction::Markdown { article_id } => {
            client.get_article_markdown(&article_id).await.map(text)
        }
        ArticleAction::Html { article_id, fullpage } => client
            .get_article_html(&article_id, fullpage.then_some(true))
            .await
            .map(text),
        ArticleAction::Assets { article_id } => client.get_article_assets(&article_id).await,
        ArticleAction::Responses { article_id } => client.get_article_responses(&article_id).await,
        ArticleAction::Fans { article_id } => client.get_article_fans(&article_id).await,
        ArticleAction::Related { article_id } => client.get_article_related(&article_id).await,
        ArticleAction::Recommended { article_id } => {
            client.get_article_recommended(&article_id).await
        }
        ArticleAction::ByUrl { url } => client.get_article_by_url(&url).await,
    }
}

async fn publication(client: &MediumClient, action: PublicationAction) -> Result<Reply> {
    match action {
        PublicationAction::Id { slug } => client.get_publication_id(&slug).await.map(text),
        PublicationAction::Info { publication_id } => {
            client.get_publication_info(&publication_id).await
        }
        PublicationAction::Articles { publication_id, from } => {
            client
                .get_publication_articles(&publication_id, from.as_deref())
                .await
        }
        PublicationAction::Newsletter { publication_id } => {
            client.get_publication_newsletter(&publication_id).await
        }
        PublicationAction::Editors { publication_id } => {
            client.get_publication_editors(&publication_id).await
        }
    }
}

async fn tag(client: &MediumClient, action: TagAction) -> Result<Reply> {
    match action {
        TagAction::Info { tag } => client.get_tag_info(&tag).await,
        TagAction::Related { tag } => client.get_related_tags(&tag).await,
        TagAction::Root => client.get_root_tags().await,
        TagAction::TopWriters { topic, count } => client.get_top_writers(&topic, count).await,
        TagAction::Latest { topic } => client.get_latest_posts(&topic).await,
        TagAction::TopFeeds { tag, mode, after, count } => {
            client.get_top_feeds(&tag, mode, after, count).await
        }
        TagAction::Recommended { tag, page } => client.get_recommended_feed(&tag, page).await,
        TagAction::RecommendedUsers { tag } => client.get_recommended_users(&tag).await,
        TagAction::Archived { tag, year, month, next } => {
            client
                .get_archived_articles(&tag, year, month, next.as_deref())
                .await
        }
    }
}

async fn list(client: &MediumClient, action: ListAction) -> Result<Reply> {
    match action {
        ListAction::Info { list_id } => client.get_list_info(&list_id).await,
        ListAction::Articles { list_id } => client.get_list_articles(&list_id).await,
        ListAction::Responses { list_id } => client.get_list_responses(&list_id).await,
    }
}

async fn search(client: &MediumClient, action: SearchAction) -> Result<Reply> {
    match action {
        SearchAction::Users { query } => client.search_users(&query).await,
        SearchAction::Articles { query } => client.search_articles(&query).await,
        SearchAction::Publications { query } => client.search_publications(&query).await,
        SearchAction::Lists { query } => client.search_lists(&query).await,
        SearchAction::Tags { query } => client.search_tags(&query).await,
    }
}
