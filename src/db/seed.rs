use crate::models::activity::NewActivity;
use crate::models::destination::NewDestination;
use crate::models::flight::NewFlight;
use crate::models::hotel::NewHotel;

// Demo catalog loaded into a fresh store. Ids follow insertion order, so the
// activity `destination_id` values below line up with the destination list.

pub fn destinations() -> Vec<NewDestination> {
    vec![
        NewDestination {
            name: "Paris".to_string(),
            country: "France".to_string(),
            description: "The City of Light, known for its stunning architecture, art museums, and romantic atmosphere.".to_string(),
            image_url: "https://images.unsplash.com/photo-1499856871958-5b9627545d1a?auto=format&fit=crop&w=800&q=80".to_string(),
            lat: 48.8566,
            lng: 2.3522,
        },
        NewDestination {
            name: "Tokyo".to_string(),
            country: "Japan".to_string(),
            description: "A vibrant metropolis that blends ultramodern and traditional, from neon-lit skyscrapers to historic temples.".to_string(),
            image_url: "https://images.unsplash.com/photo-1503899036084-c55cdd92da26?auto=format&fit=crop&w=800&q=80".to_string(),
            lat: 35.6762,
            lng: 139.6503,
        },
        NewDestination {
            name: "New York".to_string(),
            country: "United States".to_string(),
            description: "The Big Apple, featuring iconic skyscrapers, diverse neighborhoods, and world-class entertainment.".to_string(),
            image_url: "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9?auto=format&fit=crop&w=800&q=80".to_string(),
            lat: 40.7128,
            lng: -74.0060,
        },
        NewDestination {
            name: "Santorini".to_string(),
            country: "Greece".to_string(),
            description: "Famous for its dramatic views, stunning sunsets, white-washed houses, and blue domed churches.".to_string(),
            image_url: "https://images.unsplash.com/photo-1506973035872-a4ec16b8e8d9?auto=format&fit=crop&w=800&q=80".to_string(),
            lat: 36.3932,
            lng: 25.4615,
        },
        NewDestination {
            name: "Bali".to_string(),
            country: "Indonesia".to_string(),
            description: "A tropical paradise known for its lush landscapes, beautiful beaches, and vibrant spiritual culture.".to_string(),
            image_url: "https://images.unsplash.com/photo-1537996194471-e657df975ab4?auto=format&fit=crop&w=800&q=80".to_string(),
            lat: -8.3405,
            lng: 115.0920,
        },
        NewDestination {
            name: "Venice".to_string(),
            country: "Italy".to_string(),
            description: "The City of Canals, famous for its waterways, gondolas, and beautiful architecture.".to_string(),
            image_url: "https://images.unsplash.com/photo-1514890547357-a9ee288728e0?auto=format&fit=crop&w=800&q=80".to_string(),
            lat: 45.4408,
            lng: 12.3155,
        },
    ]
}

pub fn flights() -> Vec<NewFlight> {
    vec![
        NewFlight {
            airline: "Sky Airways".to_string(),
            flight_number: "SA123".to_string(),
            departure_city: "New York".to_string(),
            arrival_city: "Paris".to_string(),
            departure_time: "2023-06-15T08:00:00Z".to_string(),
            arrival_time: "2023-06-15T20:00:00Z".to_string(),
            price: 650.0,
            duration: "8h 0m".to_string(),
        },
        NewFlight {
            airline: "Global Air".to_string(),
            flight_number: "GA456".to_string(),
            departure_city: "London".to_string(),
            arrival_city: "Tokyo".to_string(),
            departure_time: "2023-06-20T10:30:00Z".to_string(),
            arrival_time: "2023-06-21T08:45:00Z".to_string(),
            price: 900.0,
            duration: "12h 15m".to_string(),
        },
        NewFlight {
            airline: "Oceanic Airlines".to_string(),
            flight_number: "OA789".to_string(),
            departure_city: "Los Angeles".to_string(),
            arrival_city: "Bali".to_string(),
            departure_time: "2023-07-05T23:15:00Z".to_string(),
            arrival_time: "2023-07-07T06:30:00Z".to_string(),
            price: 1100.0,
            duration: "19h 15m".to_string(),
        },
        NewFlight {
            airline: "Mediterranean Flights".to_string(),
            flight_number: "MF234".to_string(),
            departure_city: "Rome".to_string(),
            arrival_city: "Santorini".to_string(),
            departure_time: "2023-07-10T14:20:00Z".to_string(),
            arrival_time: "2023-07-10T17:40:00Z".to_string(),
            price: 320.0,
            duration: "3h 20m".to_string(),
        },
        NewFlight {
            airline: "Atlantic Airways".to_string(),
            flight_number: "AA567".to_string(),
            departure_city: "Paris".to_string(),
            arrival_city: "New York".to_string(),
            departure_time: "2023-06-25T13:45:00Z".to_string(),
            arrival_time: "2023-06-25T23:15:00Z".to_string(),
            price: 700.0,
            duration: "9h 30m".to_string(),
        },
        NewFlight {
            airline: "Eastern Express".to_string(),
            flight_number: "EE890".to_string(),
            departure_city: "Tokyo".to_string(),
            arrival_city: "London".to_string(),
            departure_time: "2023-07-15T00:30:00Z".to_string(),
            arrival_time: "2023-07-15T18:15:00Z".to_string(),
            price: 850.0,
            duration: "13h 45m".to_string(),
        },
        NewFlight {
            airline: "Pacific Voyager".to_string(),
            flight_number: "PV321".to_string(),
            departure_city: "San Francisco".to_string(),
            arrival_city: "Tokyo".to_string(),
            departure_time: "2023-08-01T11:20:00Z".to_string(),
            arrival_time: "2023-08-02T15:05:00Z".to_string(),
            price: 780.0,
            duration: "11h 45m".to_string(),
        },
        NewFlight {
            airline: "Island Hopper".to_string(),
            flight_number: "IH654".to_string(),
            departure_city: "Athens".to_string(),
            arrival_city: "Venice".to_string(),
            departure_time: "2023-08-10T09:10:00Z".to_string(),
            arrival_time: "2023-08-10T11:25:00Z".to_string(),
            price: 240.0,
            duration: "2h 15m".to_string(),
        },
    ]
}

pub fn hotels() -> Vec<NewHotel> {
    vec![
        NewHotel {
            name: "Grand Plaza Hotel".to_string(),
            city: "Paris".to_string(),
            address: "15 Rue de Rivoli, 75001 Paris, France".to_string(),
            image_url: "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=800&q=80".to_string(),
            price: 250.0,
            rating: 4.8,
            amenities: vec![
                "Free WiFi".to_string(),
                "Spa".to_string(),
                "Pool".to_string(),
                "Restaurant".to_string(),
                "Fitness Center".to_string(),
            ],
        },
        NewHotel {
            name: "Imperial Tokyo".to_string(),
            city: "Tokyo".to_string(),
            address: "1-1-1 Uchisaiwaicho, Chiyoda City, Tokyo 100-0011, Japan".to_string(),
            image_url: "https://images.unsplash.com/photo-1590073242678-70ee3fc28f17?auto=format&fit=crop&w=800&q=80".to_string(),
            price: 320.0,
            rating: 4.9,
            amenities: vec![
                "Free WiFi".to_string(),
                "Hot Spring".to_string(),
                "Restaurant".to_string(),
                "Bar".to_string(),
                "Concierge".to_string(),
            ],
        },
        NewHotel {
            name: "Manhattan Heights".to_string(),
            city: "New York".to_string(),
            address: "123 5th Avenue, New York, NY 10010, USA".to_string(),
            image_url: "https://images.unsplash.com/photo-1578683010236-d716f9a3f461?auto=format&fit=crop&w=800&q=80".to_string(),
            price: 280.0,
            rating: 4.7,
            amenities: vec![
                "Free WiFi".to_string(),
                "Room Service".to_string(),
                "Gym".to_string(),
                "Business Center".to_string(),
                "Rooftop Bar".to_string(),
            ],
        },
        NewHotel {
            name: "Azure Santorini".to_string(),
            city: "Santorini".to_string(),
            address: "Oia 847 02, Greece".to_string(),
            image_url: "https://images.unsplash.com/photo-1570213489059-0aac6626d89c?auto=format&fit=crop&w=800&q=80".to_string(),
            price: 420.0,
            rating: 4.9,
            amenities: vec![
                "Free WiFi".to_string(),
                "Infinity Pool".to_string(),
                "Sea View".to_string(),
                "Breakfast".to_string(),
                "Airport Shuttle".to_string(),
            ],
        },
        NewHotel {
            name: "Bali Paradise Resort".to_string(),
            city: "Bali".to_string(),
            address: "Jl. Sunset Road No. 88, Kuta, Bali 80361, Indonesia".to_string(),
            image_url: "https://images.unsplash.com/photo-1596394516093-501ba68a0ba6?auto=format&fit=crop&w=800&q=80".to_string(),
            price: 180.0,
            rating: 4.6,
            amenities: vec![
                "Free WiFi".to_string(),
                "Pool".to_string(),
                "Spa".to_string(),
                "Restaurant".to_string(),
                "Beach Access".to_string(),
            ],
        },
        NewHotel {
            name: "Canal View Suites".to_string(),
            city: "Venice".to_string(),
            address: "Calle Larga XXII Marzo, 2399, 30124 Venezia VE, Italy".to_string(),
            image_url: "https://images.unsplash.com/photo-1594556787269-7b64f8edc067?auto=format&fit=crop&w=800&q=80".to_string(),
            price: 350.0,
            rating: 4.8,
            amenities: vec![
                "Free WiFi".to_string(),
                "Breakfast".to_string(),
                "Canal View".to_string(),
                "Concierge".to_string(),
                "Air Conditioning".to_string(),
            ],
        },
    ]
}

pub fn activities() -> Vec<NewActivity> {
    vec![
        // Paris
        NewActivity {
            name: "Eiffel Tower Tour".to_string(),
            destination_id: 1,
            description: "Visit the iconic Eiffel Tower and enjoy panoramic views of Paris.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1543349689-9a4d426bee8e?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 25.0,
            duration: "2h 0m".to_string(),
        },
        NewActivity {
            name: "Louvre Museum Visit".to_string(),
            destination_id: 1,
            description: "Explore the world's largest art museum and see the Mona Lisa.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1565783417722-9d90d34a69f6?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 15.0,
            duration: "3h 0m".to_string(),
        },
        NewActivity {
            name: "Seine River Cruise".to_string(),
            destination_id: 1,
            description: "Relax on a scenic cruise along the Seine River and see Paris from the water.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1520939817895-060bdaf4bc05?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 20.0,
            duration: "1h 30m".to_string(),
        },
        // Tokyo
        NewActivity {
            name: "Meiji Shrine Visit".to_string(),
            destination_id: 2,
            description: "Visit Tokyo's most famous Shinto shrine set in a beautiful forest.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1583840724806-76918f5fe5f7?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 0.0,
            duration: "1h 30m".to_string(),
        },
        NewActivity {
            name: "Shibuya Crossing Experience".to_string(),
            destination_id: 2,
            description: "Experience the world's busiest pedestrian crossing.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1542051841857-5f90071e7989?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 0.0,
            duration: "1h 0m".to_string(),
        },
        NewActivity {
            name: "Tokyo Skytree Observation".to_string(),
            destination_id: 2,
            description: "Enjoy breathtaking views from Tokyo's tallest structure.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1536098561742-ca998e48cbcc?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 18.0,
            duration: "2h 0m".to_string(),
        },
        // New York
        NewActivity {
            name: "Statue of Liberty Tour".to_string(),
            destination_id: 3,
            description: "Visit America's iconic symbol of freedom.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1605130284535-11dd9eedc58a?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 24.0,
            duration: "4h 0m".to_string(),
        },
        NewActivity {
            name: "Central Park Bike Rental".to_string(),
            destination_id: 3,
            description: "Explore Central Park on a bike at your own pace.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1517090186835-e348b621c9ca?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 15.0,
            duration: "2h 0m".to_string(),
        },
        NewActivity {
            name: "Broadway Show".to_string(),
            destination_id: 3,
            description: "Experience the magic of a Broadway performance.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1516307343428-301c0a6eeafb?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 120.0,
            duration: "2h 30m".to_string(),
        },
        // Santorini
        NewActivity {
            name: "Oia Sunset Tour".to_string(),
            destination_id: 4,
            description: "Witness the famous sunset in Oia village.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1527239441953-cafbcef4b4d6?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 30.0,
            duration: "2h 0m".to_string(),
        },
        NewActivity {
            name: "Caldera Cruise".to_string(),
            destination_id: 4,
            description: "Sail around the volcanic caldera and enjoy hot springs.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1504512485720-7d83a16ee930?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 85.0,
            duration: "5h 0m".to_string(),
        },
        NewActivity {
            name: "Wine Tasting Tour".to_string(),
            destination_id: 4,
            description: "Sample local wines from Santorini's unique vineyards.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1506377247377-2a5b3b417ebb?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 45.0,
            duration: "3h 0m".to_string(),
        },
        // Bali
        NewActivity {
            name: "Ubud Monkey Forest".to_string(),
            destination_id: 5,
            description: "Visit a natural sanctuary for Balinese long-tailed macaques.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1578469645742-46cae010e5d4?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 10.0,
            duration: "2h 0m".to_string(),
        },
        NewActivity {
            name: "Tegallalang Rice Terraces".to_string(),
            destination_id: 5,
            description: "Explore the stunning landscape of Bali's terraced rice fields.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1536152470836-b943b246224c?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 8.0,
            duration: "3h 0m".to_string(),
        },
        NewActivity {
            name: "Uluwatu Temple Sunset".to_string(),
            destination_id: 5,
            description: "Watch the sunset from this cliff-top temple with Kecak fire dance.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1577717903315-1691ae25ab3f?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 25.0,
            duration: "3h 0m".to_string(),
        },
        // Venice
        NewActivity {
            name: "Grand Canal Gondola Ride".to_string(),
            destination_id: 6,
            description: "Experience Venice from its famous canals on a traditional gondola.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1514890547357-a9ee288728e0?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 80.0,
            duration: "30m".to_string(),
        },
        NewActivity {
            name: "St. Mark's Basilica Tour".to_string(),
            destination_id: 6,
            description: "Explore the opulent cathedral at the heart of Venice.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1529260830199-42c24126f198?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 22.0,
            duration: "1h 30m".to_string(),
        },
        NewActivity {
            name: "Murano Glass Factory Visit".to_string(),
            destination_id: 6,
            description: "Watch master glassblowers create Venetian glass masterpieces.".to_string(),
            image_url: Some("https://images.unsplash.com/photo-1529154036614-a60975f5c760?auto=format&fit=crop&w=800&q=80".to_string()),
            price: 35.0,
            duration: "2h 0m".to_string(),
        },
    ]
}
