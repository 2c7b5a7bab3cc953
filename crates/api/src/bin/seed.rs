//! Development seed binary.
//!
//! Wipes existing data and loads a known dataset: the university
//! reference list, sample students and owners, listings, reviews, and a
//! few inquiries. Run with `cargo run --bin seed`.

use anyhow::Context;

use campusnest_api::auth::password::hash_password;
use campusnest_core::types::DbId;
use campusnest_db::models::accommodation::{
    AccommodationType, CreateAccommodationListing, FoodPreference, RoomType,
};
use campusnest_db::models::food_service::{
    CreateFoodServiceListing, FoodServiceType, PriceRange,
};
use campusnest_db::models::inquiry::CreateInquiry;
use campusnest_db::models::review::CreateReview;
use campusnest_db::models::university::University;
use campusnest_db::models::user::{
    BusinessType, CreateUser, ServicePreference, StudyStream, User, UserRole,
};
use campusnest_db::repositories::{
    AccommodationRepo, FoodServiceRepo, InquiryRepo, ReviewRepo, UniversityRepo, UserRepo,
};
use campusnest_db::DbPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = campusnest_db::create_pool(&database_url)
        .await
        .context("failed to connect to database")?;
    campusnest_db::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    tracing::info!("Seeding database");

    sqlx::query(
        "TRUNCATE reviews, inquiries, accommodation_listings, food_service_listings,
         sessions, universities, users RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await?;

    seed_universities(&pool).await?;
    let students = seed_students(&pool).await?;
    let owners = seed_owners(&pool).await?;
    let accommodations = seed_accommodations(&pool, &owners).await?;
    let food_services = seed_food_services(&pool, &owners).await?;
    seed_reviews(&pool, &students, &accommodations, &food_services).await?;
    seed_inquiries(&pool, &students, &accommodations, &food_services).await?;

    tracing::info!("Seeding complete");
    tracing::info!("Test account: john@doe.com / johndoe123 (STUDENT)");
    Ok(())
}

async fn seed_universities(pool: &DbPool) -> anyhow::Result<()> {
    let rows = [
        ("iit_bombay", "IIT Bombay", StudyStream::Engineering, "Mumbai", "Maharashtra"),
        ("iit_delhi", "IIT Delhi", StudyStream::Engineering, "Delhi", "Delhi"),
        ("bits_pilani", "BITS Pilani", StudyStream::Engineering, "Pilani", "Rajasthan"),
        ("nit_trichy", "NIT Trichy", StudyStream::Engineering, "Tiruchirappalli", "Tamil Nadu"),
        ("aiims_delhi", "AIIMS Delhi", StudyStream::Medical, "Delhi", "Delhi"),
        ("pgimer_chandigarh", "PGIMER Chandigarh", StudyStream::Medical, "Chandigarh", "Chandigarh"),
        ("jipmer_puducherry", "JIPMER Puducherry", StudyStream::Medical, "Puducherry", "Puducherry"),
        ("kmc_manipal", "KMC Manipal", StudyStream::Medical, "Manipal", "Karnataka"),
    ];
    for (id, name, stream, city, state) in rows {
        UniversityRepo::upsert(
            pool,
            &University {
                id: id.to_string(),
                name: name.to_string(),
                stream,
                city: city.to_string(),
                state: state.to_string(),
            },
        )
        .await?;
    }
    tracing::info!("Created universities");
    Ok(())
}

async fn create_student(
    pool: &DbPool,
    name: &str,
    email: &str,
    password: &str,
    phone: &str,
    university: &str,
    stream: StudyStream,
    service_preference: ServicePreference,
) -> anyhow::Result<User> {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password).map_err(anyhow::Error::msg)?,
            phone: phone.to_string(),
            role: UserRole::Student,
            university: Some(university.to_string()),
            stream: Some(stream),
            service_preference: Some(service_preference),
            business_type: None,
        },
    )
    .await?;
    Ok(user)
}

async fn seed_students(pool: &DbPool) -> anyhow::Result<Vec<User>> {
    use ServicePreference::*;
    use StudyStream::*;

    // Known test account first.
    let mut students = vec![
        create_student(
            pool, "John Doe", "john@doe.com", "johndoe123", "9999999999",
            "iit_bombay", Engineering, Both,
        )
        .await?,
    ];

    let rows = [
        ("Rahul Sharma", "rahul.sharma@student.edu", "9876543210", "iit_bombay", Engineering, Both),
        ("Priya Patel", "priya.patel@student.edu", "9876543211", "aiims_delhi", Medical, Accommodation),
        ("Amit Kumar", "amit.kumar@student.edu", "9876543212", "bits_pilani", Engineering, Food),
        ("Sneha Reddy", "sneha.reddy@student.edu", "9876543213", "nit_trichy", Engineering, Both),
        ("Arjun Singh", "arjun.singh@student.edu", "9876543214", "iit_delhi", Engineering, Accommodation),
    ];
    for (name, email, phone, university, stream, pref) in rows {
        students.push(
            create_student(pool, name, email, "student123", phone, university, stream, pref)
                .await?,
        );
    }

    tracing::info!(count = students.len(), "Created students");
    Ok(students)
}

async fn seed_owners(pool: &DbPool) -> anyhow::Result<Vec<User>> {
    use BusinessType::*;

    let rows = [
        ("Rajesh Properties", "rajesh@properties.com", "9876540001", Company),
        ("Sunita PG Services", "sunita@pgservices.com", "9876540002", Individual),
        ("Mumbai Student Housing", "info@mumbaihousing.com", "9876540003", Company),
        ("Delhi Food Services", "delhi@foodservices.com", "9876540004", Company),
        ("Anita Tiffin Center", "anita@tiffin.com", "9876540005", Individual),
        ("Campus Hostel Group", "info@campushostel.com", "9876540006", Institution),
    ];

    let mut owners = Vec::with_capacity(rows.len());
    for (name, email, phone, business_type) in rows {
        let user = UserRepo::create(
            pool,
            &CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: hash_password("owner123").map_err(anyhow::Error::msg)?,
                phone: phone.to_string(),
                role: UserRole::PropertyOwner,
                university: None,
                stream: None,
                service_preference: None,
                business_type: Some(business_type),
            },
        )
        .await?;
        owners.push(user);
    }

    tracing::info!(count = owners.len(), "Created property owners");
    Ok(owners)
}

struct AccommodationSeed {
    property_name: &'static str,
    monthly_rent: i64,
    deposit: i64,
    room_type: RoomType,
    accommodation_type: AccommodationType,
    food_preference: FoodPreference,
    address: &'static str,
    contact_info: &'static str,
    description: &'static str,
    nearby_universities: &'static [&'static str],
    amenities: &'static [&'static str],
    living_preferences: &'static [&'static str],
    owner_idx: usize,
}

async fn seed_accommodations(pool: &DbPool, owners: &[User]) -> anyhow::Result<Vec<DbId>> {
    let rows = [
        AccommodationSeed {
            property_name: "Cozy PG near IIT Bombay",
            monthly_rent: 15000,
            deposit: 10000,
            room_type: RoomType::Single,
            accommodation_type: AccommodationType::Pg,
            food_preference: FoodPreference::Veg,
            address: "15/A, Powai Colony, Near IIT Bombay Main Gate, Mumbai - 400076",
            contact_info: "9876540001",
            description: "Well-maintained PG with all modern amenities, just 5 minutes walk from IIT Bombay campus.",
            nearby_universities: &["IIT Bombay"],
            amenities: &["WiFi", "AC", "Laundry", "Security", "Mess"],
            living_preferences: &["Students Only", "No Smoking"],
            owner_idx: 0,
        },
        AccommodationSeed {
            property_name: "Student Hostel - Powai",
            monthly_rent: 12000,
            deposit: 8000,
            room_type: RoomType::Double,
            accommodation_type: AccommodationType::Hostel,
            food_preference: FoodPreference::Both,
            address: "Plot 42, Hiranandani Gardens, Powai, Mumbai - 400076",
            contact_info: "9876540002",
            description: "Modern hostel facility with gym, study room, and recreational activities.",
            nearby_universities: &["IIT Bombay"],
            amenities: &["WiFi", "Gym", "Study Room", "Security", "Parking"],
            living_preferences: &["Co-ed", "No Visitors After 10 PM"],
            owner_idx: 1,
        },
        AccommodationSeed {
            property_name: "Premium Studio Apartment",
            monthly_rent: 25000,
            deposit: 20000,
            room_type: RoomType::Studio,
            accommodation_type: AccommodationType::Apartment,
            food_preference: FoodPreference::Both,
            address: "Tower C, Vaswani Reserve, Kalyani Nagar, Pune - 411014",
            contact_info: "9876540003",
            description: "Fully furnished studio apartment with kitchen, perfect for graduate students.",
            nearby_universities: &["BITS Pilani"],
            amenities: &["WiFi", "AC", "Parking", "Security", "Kitchen"],
            living_preferences: &["Graduate Students", "Professional Environment"],
            owner_idx: 2,
        },
        AccommodationSeed {
            property_name: "Budget-Friendly Sharing Room",
            monthly_rent: 8000,
            deposit: 5000,
            room_type: RoomType::Sharing,
            accommodation_type: AccommodationType::Pg,
            food_preference: FoodPreference::Veg,
            address: "Sector 14, Near PGIMER, Chandigarh - 160014",
            contact_info: "9876540004",
            description: "Affordable sharing accommodation for medical students near PGIMER.",
            nearby_universities: &["PGIMER Chandigarh"],
            amenities: &["WiFi", "Laundry", "Study Area"],
            living_preferences: &["Medical Students Only", "Quiet Environment"],
            owner_idx: 3,
        },
        AccommodationSeed {
            property_name: "Luxury PG for Girls",
            monthly_rent: 18000,
            deposit: 15000,
            room_type: RoomType::Single,
            accommodation_type: AccommodationType::Pg,
            food_preference: FoodPreference::Veg,
            address: "23/B, Karol Bagh, Near Delhi University, New Delhi - 110005",
            contact_info: "9876540005",
            description: "Premium PG accommodation for girls with 24/7 security and all facilities.",
            nearby_universities: &["IIT Delhi", "AIIMS Delhi"],
            amenities: &["WiFi", "AC", "Security", "Mess", "Laundry", "Study Room"],
            living_preferences: &["Girls Only", "24/7 Security", "No Male Visitors"],
            owner_idx: 4,
        },
        AccommodationSeed {
            property_name: "Modern Flat for Students",
            monthly_rent: 20000,
            deposit: 15000,
            room_type: RoomType::Double,
            accommodation_type: AccommodationType::Flat,
            food_preference: FoodPreference::Both,
            address: "Flat 301, Sunrise Apartments, Anna Nagar, Chennai - 600040",
            contact_info: "9876540006",
            description: "Spacious 2BHK flat perfect for engineering students, close to college.",
            nearby_universities: &["NIT Trichy"],
            amenities: &["WiFi", "AC", "Parking", "Kitchen"],
            living_preferences: &["Engineering Students", "Shared Cooking"],
            owner_idx: 5,
        },
    ];

    let mut ids = Vec::with_capacity(rows.len());
    for seed in rows {
        let listing = AccommodationRepo::create(
            pool,
            &CreateAccommodationListing {
                property_name: seed.property_name.to_string(),
                photos: Vec::new(),
                monthly_rent: Some(seed.monthly_rent),
                daily_rate: None,
                min_stay: None,
                deposit: Some(seed.deposit),
                amenities: to_strings(seed.amenities),
                room_type: seed.room_type,
                accommodation_type: seed.accommodation_type,
                living_preferences: to_strings(seed.living_preferences),
                food_preference: seed.food_preference,
                address: seed.address.to_string(),
                latitude: None,
                longitude: None,
                contact_info: seed.contact_info.to_string(),
                description: Some(seed.description.to_string()),
                nearby_universities: to_strings(seed.nearby_universities),
                distance_from_uni: None,
                owner_id: owners[seed.owner_idx].id,
            },
        )
        .await?;
        ids.push(listing.id);
    }

    tracing::info!(count = ids.len(), "Created accommodation listings");
    Ok(ids)
}

struct FoodServiceSeed {
    service_name: &'static str,
    service_type: FoodServiceType,
    price_range: PriceRange,
    address: &'static str,
    contact_info: &'static str,
    description: &'static str,
    operating_hours: &'static str,
    cuisine_types: &'static [&'static str],
    veg_options: bool,
    non_veg_options: bool,
    delivery_available: bool,
    owner_idx: usize,
}

async fn seed_food_services(pool: &DbPool, owners: &[User]) -> anyhow::Result<Vec<DbId>> {
    let rows = [
        FoodServiceSeed {
            service_name: "South Indian Tiffin Express",
            service_type: FoodServiceType::TiffinService,
            price_range: PriceRange::Budget,
            address: "Shop 15, Powai Market, Near IIT Bombay, Mumbai - 400076",
            contact_info: "anita@tiffin.com",
            description: "Authentic South Indian meals delivered fresh daily. Specializing in dosa, idli, sambar.",
            operating_hours: "7:00 AM - 9:00 PM",
            cuisine_types: &["South Indian", "Breakfast", "Snacks"],
            veg_options: true,
            non_veg_options: false,
            delivery_available: true,
            owner_idx: 4,
        },
        FoodServiceSeed {
            service_name: "Campus Mess - North Indian",
            service_type: FoodServiceType::Mess,
            price_range: PriceRange::Budget,
            address: "12/A, Student Colony, Sector 15, Chandigarh - 160015",
            contact_info: "9876540007",
            description: "Traditional North Indian mess serving unlimited meals for students.",
            operating_hours: "8:00 AM - 10:00 PM",
            cuisine_types: &["North Indian", "Punjabi"],
            veg_options: true,
            non_veg_options: true,
            delivery_available: false,
            owner_idx: 3,
        },
        FoodServiceSeed {
            service_name: "Dragon Palace Chinese",
            service_type: FoodServiceType::Restaurant,
            price_range: PriceRange::Moderate,
            address: "FC Road, Near Fergusson College, Pune - 411004",
            contact_info: "9876540008",
            description: "Popular Chinese restaurant among students, known for quick service and affordable prices.",
            operating_hours: "12:00 PM - 11:00 PM",
            cuisine_types: &["Chinese", "Fast Food", "Indo-Chinese"],
            veg_options: true,
            non_veg_options: true,
            delivery_available: true,
            owner_idx: 0,
        },
        FoodServiceSeed {
            service_name: "Continental Corner Cafe",
            service_type: FoodServiceType::Cafe,
            price_range: PriceRange::Moderate,
            address: "Ground Floor, Student Center, IIT Delhi, New Delhi - 110016",
            contact_info: "9876540009",
            description: "Cozy cafe serving continental breakfast, sandwiches, and beverages.",
            operating_hours: "7:00 AM - 10:00 PM",
            cuisine_types: &["Continental", "Beverages", "Snacks"],
            veg_options: true,
            non_veg_options: false,
            delivery_available: false,
            owner_idx: 1,
        },
        FoodServiceSeed {
            service_name: "Student Canteen Deluxe",
            service_type: FoodServiceType::Canteen,
            price_range: PriceRange::Budget,
            address: "Building 2, Ground Floor, NIT Campus, Tiruchirappalli - 620015",
            contact_info: "9876540010",
            description: "Large capacity canteen serving variety of meals for engineering students.",
            operating_hours: "6:00 AM - 10:00 PM",
            cuisine_types: &["North Indian", "South Indian", "Snacks"],
            veg_options: true,
            non_veg_options: true,
            delivery_available: false,
            owner_idx: 5,
        },
        FoodServiceSeed {
            service_name: "Healthy Bites Tiffin",
            service_type: FoodServiceType::TiffinService,
            price_range: PriceRange::Moderate,
            address: "Manipal University Area, Manipal - 576104",
            contact_info: "9876540011",
            description: "Health-focused tiffin service with organic ingredients and balanced nutrition.",
            operating_hours: "8:00 AM - 8:00 PM",
            cuisine_types: &["North Indian", "South Indian", "Continental"],
            veg_options: true,
            non_veg_options: true,
            delivery_available: true,
            owner_idx: 2,
        },
    ];

    let mut ids = Vec::with_capacity(rows.len());
    for seed in rows {
        let listing = FoodServiceRepo::create(
            pool,
            &CreateFoodServiceListing {
                service_name: seed.service_name.to_string(),
                photos: Vec::new(),
                service_type: seed.service_type,
                price_range: seed.price_range,
                menu_details: None,
                cuisine_types: to_strings(seed.cuisine_types),
                veg_options: seed.veg_options,
                non_veg_options: seed.non_veg_options,
                address: seed.address.to_string(),
                latitude: None,
                longitude: None,
                contact_info: seed.contact_info.to_string(),
                description: Some(seed.description.to_string()),
                operating_hours: Some(seed.operating_hours.to_string()),
                delivery_available: seed.delivery_available,
                owner_id: owners[seed.owner_idx].id,
            },
        )
        .await?;
        ids.push(listing.id);
    }

    tracing::info!(count = ids.len(), "Created food service listings");
    Ok(ids)
}

async fn seed_reviews(
    pool: &DbPool,
    students: &[User],
    accommodations: &[DbId],
    food_services: &[DbId],
) -> anyhow::Result<()> {
    // (rating, comment, student index, accommodation index, food index)
    let rows: [(i32, &str, usize, Option<usize>, Option<usize>); 12] = [
        (5, "Excellent PG with great facilities and very clean rooms!", 1, Some(0), None),
        (4, "Good location near campus, but WiFi could be better.", 2, Some(0), None),
        (5, "Best hostel experience! Great community and facilities.", 3, Some(1), None),
        (4, "Studio is well-furnished but slightly expensive.", 4, Some(2), None),
        (3, "Decent place for the price, basic amenities provided.", 5, Some(3), None),
        (5, "Very safe and secure for girls, highly recommended!", 2, Some(4), None),
        (5, "Amazing South Indian food, tastes just like home!", 1, None, Some(0)),
        (4, "Good variety and unlimited meals, value for money.", 3, None, Some(1)),
        (4, "Fast service and tasty Chinese food, perfect for students.", 4, None, Some(2)),
        (5, "Great ambiance for study sessions, excellent coffee!", 2, None, Some(3)),
        (3, "Large portions but food quality varies sometimes.", 5, None, Some(4)),
        (5, "Healthy options and on-time delivery, very satisfied!", 1, None, Some(5)),
    ];

    for (rating, comment, student_idx, acc_idx, food_idx) in rows {
        ReviewRepo::create(
            pool,
            &CreateReview {
                rating,
                comment: Some(comment.to_string()),
                user_id: students[student_idx].id,
                accommodation_listing_id: acc_idx.map(|i| accommodations[i]),
                food_service_listing_id: food_idx.map(|i| food_services[i]),
            },
        )
        .await?;
    }

    tracing::info!("Created reviews");
    Ok(())
}

async fn seed_inquiries(
    pool: &DbPool,
    students: &[User],
    accommodations: &[DbId],
    food_services: &[DbId],
) -> anyhow::Result<()> {
    let pending = [
        (
            "Hi, I am interested in visiting your PG this weekend. What would be the best time?",
            1,
            Some(accommodations[0]),
            None,
        ),
        (
            "Do you provide meal plans? What are the monthly charges including food?",
            2,
            None,
            Some(food_services[0]),
        ),
    ];
    let responded = [
        (
            "Is the hostel room available for immediate occupancy? I need to move in next week.",
            3,
            Some(accommodations[1]),
            None,
            "Yes, we have rooms available. Please call us to schedule a visit.",
        ),
        (
            "What are the delivery timings and minimum order requirements?",
            4,
            None,
            Some(food_services[2]),
            "We deliver between 12 PM - 8 PM. Minimum order is ₹100.",
        ),
    ];

    for (message, student_idx, acc_id, food_id) in pending {
        create_inquiry(pool, message, &students[student_idx], acc_id, food_id).await?;
    }
    for (message, student_idx, acc_id, food_id, response) in responded {
        let inquiry =
            create_inquiry(pool, message, &students[student_idx], acc_id, food_id).await?;
        InquiryRepo::respond(pool, inquiry, response).await?;
    }

    tracing::info!("Created inquiries");
    Ok(())
}

async fn create_inquiry(
    pool: &DbPool,
    message: &str,
    student: &User,
    accommodation_listing_id: Option<DbId>,
    food_service_listing_id: Option<DbId>,
) -> anyhow::Result<DbId> {
    let inquiry = InquiryRepo::create(
        pool,
        &CreateInquiry {
            message: message.to_string(),
            student_name: student.name.clone(),
            student_email: student.email.clone(),
            student_phone: student.phone.clone(),
            student_id: student.id,
            accommodation_listing_id,
            food_service_listing_id,
        },
    )
    .await?;
    Ok(inquiry.id)
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
