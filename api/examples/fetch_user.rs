use medium_api::{MediumClient, Reply};
use std::env;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let Ok(api_key) = env::var("RAPIDAPI_KEY") else {
        eprintln!("Error: RAPIDAPI_KEY not set.");
        eprintln!("Create a .env file with:");
        eprintln!("RAPIDAPI_KEY=your_key_here\n");
        return;
    };

    let username = env::args().nth(1).unwrap_or_else(|| "medium".to_string());
    let client = MediumClient::new(api_key);

    println!("Looking up @{}...\n", username);

    let user_id = match client.get_user_id(&username).await {
        Ok(Reply::Data(id)) => id,
        Ok(Reply::Failed(failure)) => {
            eprintln!("{}", failure.message);
            return;
        }
        Err(e) => {
            eprintln!("Error resolving user: {}", e);
            return;
        }
    };

    match client.get_user_info(&user_id).await {
        Ok(Reply::Data(info)) => {
            println!("id:        {}", user_id);
            println!("fullname:  {}", info["fullname"].as_str().unwrap_or("-"));
            println!("followers: {}", info["followers_count"]);
        }
        Ok(Reply::Failed(failure)) => eprintln!("{}", failure.message),
        Err(e) => eprintln!("Error fetching user info: {}", e),
    }
}
