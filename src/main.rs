// SoloQuest command-line shell
//
// Wires configuration, local storage and the advisory engine together and
// exposes each feature area as a subcommand. All rendering is plain text;
// the library owns every behavior worth testing.

use clap::{Parser, Subcommand};

use soloquest::advisory::resolver::AdvisorySource;
use soloquest::advisory::AdvisoryRecord;
use soloquest::api::auth::SignUpRequest;
use soloquest::api::blogs::NewPost;
use soloquest::api::connections::{classify_requests, RequestDirection};
use soloquest::api::favourites::booking_links;
use soloquest::api::itineraries::{
    format_stop_times, ItineraryItem, ItineraryUpdate, NewItinerary,
};
use soloquest::app::{self, AppState};
use soloquest::config::Config;
use soloquest::reference;

#[derive(Parser)]
#[command(name = "soloquest", about = "Travel companion client: safety advisories, blogs, connections and itineraries")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up the safety advisory for a country code
    Advisory {
        /// ISO country code, e.g. US, FR, IN
        code: String,
        /// Treat the network as unreachable and use bundled fallback data
        #[arg(long)]
        offline: bool,
    },
    /// Show the cached result of the last successful lookup
    LastAdvisory,
    /// Sign in with email and password
    SignIn { email: String, password: String },
    /// Create an account
    SignUp {
        email: String,
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
    },
    /// Forget the stored session
    SignOut,
    /// Show the signed-in user
    Whoami,
    /// Change the signed-in user's password
    ChangePassword {
        current_password: String,
        new_password: String,
    },
    /// Manage favourite countries
    #[command(subcommand)]
    Favourites(FavouritesCommand),
    /// Browse and like blog posts
    #[command(subcommand)]
    Blogs(BlogsCommand),
    /// Connect with other travelers
    #[command(subcommand)]
    Connect(ConnectCommand),
    /// Manage itineraries
    #[command(subcommand)]
    Itineraries(ItinerariesCommand),
}

#[derive(Subcommand)]
enum FavouritesCommand {
    /// List favourites with booking links
    List,
    Add { code: String },
    Remove { code: String },
}

#[derive(Subcommand)]
enum BlogsCommand {
    List,
    Categories,
    Like { post_id: i64 },
    /// Publish a new post
    Post {
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "")]
        tags: String,
        #[arg(long)]
        category: Option<i64>,
    },
    Comment { post_id: i64, content: String },
    EditComment { comment_id: i64, content: String },
    DeleteComment { comment_id: i64 },
}

#[derive(Subcommand)]
enum ConnectCommand {
    /// List pending friend requests and their direction
    Requests,
    Friends,
    /// Search all travelers by name or email
    Users {
        #[arg(default_value = "")]
        term: String,
    },
    SendRequest { user_id: i64 },
    AcceptRequest { request_id: i64 },
    /// Cancel a request you sent (or decline one sent to you)
    CancelRequest { request_id: i64 },
    /// List users you have blocked
    Blocked,
    Block { user_id: i64 },
    Unblock { blocked_id: i64 },
}

#[derive(Subcommand)]
enum ItinerariesCommand {
    /// List itineraries with stops in destination and local time
    List,
    /// Create an itinerary; stops are "DATE|TIME|LOCATION|ACTIVITY[|NOTES]"
    Create {
        title: String,
        #[arg(long = "stop")]
        stops: Vec<String>,
    },
    /// Replace an itinerary's title, timezone and stops
    Update {
        id: i64,
        title: String,
        #[arg(long, default_value = "UTC")]
        timezone: String,
        #[arg(long = "stop")]
        stops: Vec<String>,
    },
    Delete { id: i64 },
}

/// Parse one `--stop` argument: DATE|TIME|LOCATION|ACTIVITY[|NOTES].
fn parse_stop(raw: &str) -> Result<ItineraryItem, String> {
    let parts: Vec<&str> = raw.split('|').collect();
    if parts.len() < 4 || parts.len() > 5 {
        return Err(format!(
            "invalid stop '{}': expected DATE|TIME|LOCATION|ACTIVITY[|NOTES]",
            raw
        ));
    }
    Ok(ItineraryItem {
        date: parts[0].trim().to_string(),
        time: parts[1].trim().to_string(),
        location: parts[2].trim().to_string(),
        activity: parts[3].trim().to_string(),
        notes: parts.get(4).map(|s| s.trim().to_string()).unwrap_or_default(),
    })
}

fn parse_stops(raw: &[String]) -> Result<Vec<ItineraryItem>, String> {
    raw.iter().map(|s| parse_stop(s)).collect()
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("soloquest=info"))
        .init();

    let cli = Cli::parse();
    let state = match AppState::init(Config::from_env()).await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(message) = run(&state, cli.command).await {
        eprintln!("{}", message);
        std::process::exit(1);
    }
}

async fn run(state: &AppState, command: Command) -> Result<(), String> {
    match command {
        Command::Advisory { code, offline } => {
            if let Some(cached) = app::advisory::startup(state).await {
                println!("(last result: {})\n", cached.name);
            }
            let resolution = app::advisory::search(state, &code, !offline)
                .await
                .map_err(|e| e.to_string())?;
            if resolution.source == AdvisorySource::Fallback {
                println!("[offline data]");
            }
            print_advisory(&resolution.record);
            Ok(())
        }
        Command::LastAdvisory => {
            match app::advisory::last_result(state).await {
                Some(record) => print_advisory(&record),
                None => println!("No advisory has been looked up yet."),
            }
            Ok(())
        }
        Command::SignIn { email, password } => {
            let user = app::session::sign_in(state, &email, &password)
                .await
                .map_err(|e| e.to_string())?;
            println!("Signed in as {} ({})", user.display_name(), user.email);
            Ok(())
        }
        Command::SignUp {
            email,
            password,
            first_name,
            last_name,
        } => {
            let request = SignUpRequest {
                email,
                password,
                first_name,
                last_name,
            };
            let user = app::session::sign_up(state, &request)
                .await
                .map_err(|e| e.to_string())?;
            println!("Welcome, {}!", user.display_name());
            Ok(())
        }
        Command::SignOut => {
            app::session::sign_out(state).await.map_err(|e| e.to_string())?;
            println!("Signed out.");
            Ok(())
        }
        Command::Whoami => {
            match app::session::current_user(state).await {
                Some(user) => println!("{} ({})", user.display_name(), user.email),
                None => println!("Not signed in."),
            }
            Ok(())
        }
        Command::ChangePassword {
            current_password,
            new_password,
        } => {
            let client = app::session::api_client(state).await.map_err(|e| e.to_string())?;
            client
                .change_password(&current_password, &new_password)
                .await
                .map_err(|e| e.to_string())?;
            println!("Password changed.");
            Ok(())
        }
        Command::Favourites(cmd) => run_favourites(state, cmd).await,
        Command::Blogs(cmd) => run_blogs(state, cmd).await,
        Command::Connect(cmd) => run_connect(state, cmd).await,
        Command::Itineraries(cmd) => run_itineraries(state, cmd).await,
    }
}

async fn run_favourites(state: &AppState, command: FavouritesCommand) -> Result<(), String> {
    let client = app::session::api_client(state).await.map_err(|e| e.to_string())?;
    match command {
        FavouritesCommand::List => {
            let favourites = client.list_favourites().await.map_err(|e| e.to_string())?;
            if favourites.is_empty() {
                println!("No favorites added yet.");
            }
            for favourite in favourites {
                let name = reference::country_name(&favourite.country_code)
                    .unwrap_or(favourite.country_code.as_str());
                println!("{} ({})", name, favourite.country_code);
                let links = booking_links(name);
                println!("  flights:    {}", links.flights);
                println!("  hotels:     {}", links.hotels);
                println!("  activities: {}", links.activities);
                println!("  reviews:    {}", links.reviews);
            }
        }
        FavouritesCommand::Add { code } => {
            client.add_favourite(&code).await.map_err(|e| e.to_string())?;
            println!("{} added to favourites!", code.to_uppercase());
        }
        FavouritesCommand::Remove { code } => {
            client.remove_favourite(&code).await.map_err(|e| e.to_string())?;
            println!("{} removed from favourites.", code.to_uppercase());
        }
    }
    Ok(())
}

async fn run_blogs(state: &AppState, command: BlogsCommand) -> Result<(), String> {
    let client = app::session::api_client(state).await.map_err(|e| e.to_string())?;
    match command {
        BlogsCommand::List => {
            for post in client.list_posts().await.map_err(|e| e.to_string())? {
                println!(
                    "#{} {} by {} ({} likes)",
                    post.id,
                    post.title,
                    post.author_name.as_deref().unwrap_or("Unknown"),
                    post.likes_count
                );
                for comment in &post.comments {
                    println!("    {}: {}", comment.user, comment.content);
                }
            }
        }
        BlogsCommand::Categories => {
            for category in client.list_categories().await.map_err(|e| e.to_string())? {
                println!("#{} {}", category.id, category.name);
            }
        }
        BlogsCommand::Like { post_id } => {
            let response = client.like_post(post_id).await.map_err(|e| e.to_string())?;
            println!("Post {} now has {} likes", post_id, response.likes_count);
        }
        BlogsCommand::Post {
            title,
            content,
            tags,
            category,
        } => {
            let post = client
                .create_post(&NewPost {
                    title,
                    content,
                    tags,
                    category,
                })
                .await
                .map_err(|e| e.to_string())?;
            println!("Published post #{}: {}", post.id, post.title);
        }
        BlogsCommand::Comment { post_id, content } => {
            let comment = client
                .add_comment(post_id, &content)
                .await
                .map_err(|e| e.to_string())?;
            println!("Comment #{} added.", comment.id);
        }
        BlogsCommand::EditComment { comment_id, content } => {
            client
                .edit_comment(comment_id, &content)
                .await
                .map_err(|e| e.to_string())?;
            println!("Comment {} updated.", comment_id);
        }
        BlogsCommand::DeleteComment { comment_id } => {
            client
                .delete_comment(comment_id)
                .await
                .map_err(|e| e.to_string())?;
            println!("Comment {} deleted.", comment_id);
        }
    }
    Ok(())
}

async fn run_connect(state: &AppState, command: ConnectCommand) -> Result<(), String> {
    let client = app::session::api_client(state).await.map_err(|e| e.to_string())?;
    match command {
        ConnectCommand::Requests => {
            let me = app::session::current_user(state)
                .await
                .ok_or("Not signed in.")?;
            let requests = client.list_friend_requests().await.map_err(|e| e.to_string())?;
            for pending in classify_requests(requests, me.id) {
                let action = match pending.direction {
                    RequestDirection::Outgoing => "pending, sent by you",
                    RequestDirection::Incoming => "awaiting your reply",
                };
                println!(
                    "#{} {} ({}) - {}",
                    pending.request_id,
                    pending.other.first_name,
                    pending.other.email,
                    action
                );
            }
        }
        ConnectCommand::Friends => {
            for friend in client.list_friends().await.map_err(|e| e.to_string())? {
                println!("{} {} ({})", friend.first_name, friend.last_name, friend.email);
            }
        }
        ConnectCommand::Users { term } => {
            let me = app::session::current_user(state)
                .await
                .ok_or("Not signed in.")?;
            let users = client.list_users().await.map_err(|e| e.to_string())?;
            for user in users
                .iter()
                .filter(|u| soloquest::api::connections::matches_search(u, me.id, &term))
            {
                println!("#{} {} {} ({})", user.id, user.first_name, user.last_name, user.email);
            }
        }
        ConnectCommand::SendRequest { user_id } => {
            client.send_friend_request(user_id).await.map_err(|e| e.to_string())?;
            println!("Request sent!");
        }
        ConnectCommand::AcceptRequest { request_id } => {
            client.accept_friend_request(request_id).await.map_err(|e| e.to_string())?;
            println!("Request accepted.");
        }
        ConnectCommand::CancelRequest { request_id } => {
            client.delete_friend_request(request_id).await.map_err(|e| e.to_string())?;
            println!("Request removed.");
        }
        ConnectCommand::Blocked => {
            for entry in client.list_blocked_users().await.map_err(|e| e.to_string())? {
                println!(
                    "#{} {} {} ({})",
                    entry.id, entry.blocked.first_name, entry.blocked.last_name, entry.blocked.email
                );
            }
        }
        ConnectCommand::Block { user_id } => {
            client.block_user(user_id).await.map_err(|e| e.to_string())?;
            println!("User blocked.");
        }
        ConnectCommand::Unblock { blocked_id } => {
            client.unblock_user(blocked_id).await.map_err(|e| e.to_string())?;
            println!("User unblocked.");
        }
    }
    Ok(())
}

async fn run_itineraries(state: &AppState, command: ItinerariesCommand) -> Result<(), String> {
    let client = app::session::api_client(state).await.map_err(|e| e.to_string())?;
    match command {
        ItinerariesCommand::List => {
            let viewer = viewer_timezone();
            for itinerary in client.my_itineraries().await.map_err(|e| e.to_string())? {
                println!("{} [{}]", itinerary.title, itinerary.timezone);
                for item in &itinerary.items {
                    println!("  {} - {}", item.location, item.activity);
                    match format_stop_times(item, &itinerary.timezone, viewer) {
                        Some(times) => {
                            println!("    Your time: {}", times.viewer);
                            println!("    {} time: {}", itinerary.timezone, times.destination);
                        }
                        None => println!("    {} {}", item.date, item.time),
                    }
                    if !item.notes.is_empty() {
                        println!("    Notes: {}", item.notes);
                    }
                }
            }
        }
        ItinerariesCommand::Create { title, stops } => {
            let items = parse_stops(&stops)?;
            let created = client
                .create_itinerary(&NewItinerary { title, items })
                .await
                .map_err(|e| e.to_string())?;
            println!("Created itinerary #{}: {}", created.id, created.title);
        }
        ItinerariesCommand::Update {
            id,
            title,
            timezone,
            stops,
        } => {
            let items = parse_stops(&stops)?;
            client
                .update_itinerary(
                    id,
                    &ItineraryUpdate {
                        title,
                        timezone,
                        items,
                    },
                )
                .await
                .map_err(|e| e.to_string())?;
            println!("Itinerary {} updated.", id);
        }
        ItinerariesCommand::Delete { id } => {
            client.delete_itinerary(id).await.map_err(|e| e.to_string())?;
            println!("Itinerary {} deleted.", id);
        }
    }
    Ok(())
}

fn viewer_timezone() -> chrono_tz::Tz {
    std::env::var("TZ")
        .ok()
        .and_then(|name| name.parse().ok())
        .unwrap_or(chrono_tz::Tz::UTC)
}

fn print_advisory(record: &AdvisoryRecord) {
    let risk = record.risk_level();
    println!("Safety Information for {}", record.name);
    println!(
        "Advisory State: {} ({} / {})",
        record
            .advisory_state
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string()),
        risk.label(),
        risk.color()
    );
    println!("General Advisory: {}", record.advisory_text);

    if let Some(regional) = &record.advisories {
        if !regional.regional_advisories.is_empty() {
            println!("\nRegional Advisories");
            for section in &regional.regional_advisories {
                println!("  {}: {}", section.category, section.description);
            }
        }
    }
    if let Some(climate) = &record.climate {
        if !climate.climate_info.is_empty() {
            println!("\nClimate Information");
            for section in &climate.climate_info {
                println!("  {}: {}", section.category, section.description);
            }
        }
    }
    if let Some(health) = &record.health {
        if !health.health_info.is_empty() {
            println!("\nHealth Information");
            for section in &health.health_info {
                println!("  {}: {}", section.category, section.description);
            }
        }
    }
}
