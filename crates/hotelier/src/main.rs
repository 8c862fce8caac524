//! # hotelier: hotel administration tool
//!
//! Loads configuration, opens the configured storage, and prints an overview
//! of each tab.

use hotelier::{Config, Hotel, Shell, Tab, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    logging::init(&config.logging.filter);

    let shell = Shell::new(Hotel::open(&config)?);
    let hotel = shell.hotel();

    for tab in Tab::ALL {
        let count = match tab {
            Tab::Rooms => hotel.rooms().list_rooms()?.len(),
            Tab::Guests => hotel.guests().list_guests()?.len(),
            Tab::Reservations => hotel.reservations().list_reservations()?.len(),
        };
        println!("{tab}: {count}");
    }

    for details in shell.reservation_details()? {
        let reservation = &details.reservation;
        println!(
            "  {} {} -> {} | quarto {} | {} | {}",
            reservation.status,
            reservation.check_in,
            reservation.check_out,
            details.room_number.as_deref().unwrap_or("N/A"),
            details.guest_name.as_deref().unwrap_or("N/A"),
            details.room_availability,
        );
    }

    if let Some(notice) = shell.reservation_notice()? {
        println!("{notice}");
    }

    Ok(())
}
