use geohash_rs::{Direction, GeohashCell, GeohashError};

fn main() -> Result<(), GeohashError> {
    let lon = 4.8952;
    let lat = 52.3702;

    let cell = GeohashCell::from_coord(&(lon, lat), 9)?;

    println!("Geohash: {}", cell.hash);
    println!("Center: ({}, {})", cell.latitude(), cell.longitude());
    println!(
        "Error: ±{} lat, ±{} lon",
        cell.error().latitude,
        cell.error().longitude
    );
    println!("North: {}", cell.neighbour(Direction::NORTH)?.hash);

    let polygon = cell.to_polygon();
    println!("Polygon: {:?}", polygon);

    Ok(())
}
