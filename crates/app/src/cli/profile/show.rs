use clap::Args;
use groomerlink_app::{
    database::{self, Db},
    domain::profiles::{
        PgProfilesService, ProfilesService,
        links::{booking_greeting, instagram_url, whatsapp_url},
        ownership::OwnerSecret,
        records::{ProfileLocator, ProfileRecord},
    },
};

#[derive(Debug, Args)]
pub(crate) struct ShowProfileArgs {
    /// Profile UUID or slug
    locator: String,

    /// Owner secret; required when looking a profile up by UUID
    #[arg(long, env = "OWNER_SECRET", hide_env_values = true)]
    owner_secret: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ShowProfileArgs) -> Result<(), String> {
    let locator = ProfileLocator::parse(args.locator.trim())
        .ok_or_else(|| format!("'{}' is neither a profile UUID nor a slug", args.locator))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProfilesService::new(Db::new(pool));

    let record = match (&locator, args.owner_secret) {
        (_, Some(secret)) => {
            service
                .get_profile_for_edit(&locator, &OwnerSecret::new(secret))
                .await
        }
        (ProfileLocator::Slug(slug), None) => service.get_public_profile(slug).await,
        (ProfileLocator::Uuid(_), None) => {
            return Err("--owner-secret is required to look a profile up by UUID".to_string());
        }
    }
    .map_err(|error| format!("failed to load profile: {error}"))?;

    print_profile(&record);

    Ok(())
}

fn print_profile(record: &ProfileRecord) {
    let content = &record.content;

    println!("uuid: {}", record.uuid);
    println!("slug: {}", record.slug);
    println!("public_path: {}", record.slug.public_path());
    println!("display_name: {}", content.display_name);

    if let Some(business_name) = &content.business_name {
        println!("business_name: {business_name}");
    }

    println!("phone: {}", content.phone);

    if let Some(url) = whatsapp_url(&content.phone, &booking_greeting(&content.display_name)) {
        println!("whatsapp: {url}");
    }

    if let Some(url) = content.social_handle.as_deref().and_then(instagram_url) {
        println!("instagram: {url}");
    }

    println!("address: {}", content.address);

    if let Some(photo_ref) = &content.photo_ref {
        println!("photo_ref: {photo_ref}");
    }

    for hours in &content.hours {
        if hours.closed {
            println!("hours: {} closed", hours.day_label);
        } else {
            println!("hours: {} {}-{}", hours.day_label, hours.opens_at, hours.closes_at);
        }
    }

    for service in &content.services {
        match service.price {
            Some(price) => println!("service: {} R$ {price:.2}", service.name),
            None => println!("service: {}", service.name),
        }
    }

    println!("created_at: {}", record.created_at);
    println!("updated_at: {}", record.updated_at);
}
