//! Encoded polyline decoding
//!
//! Routing responses carry path geometry as an encoded polyline: each
//! coordinate is stored as the zig-zag encoded delta from the previous one,
//! scaled by 1e5 and split into 5-bit chunks offset by 63.

use crate::errors::DomainError;
use crate::value_objects::Coordinate;

const PRECISION: f64 = 1e5;
const CHUNK_OFFSET: u8 = 63;
const CONTINUATION_BIT: i64 = 0x20;
const CHUNK_MASK: i64 = 0x1f;
const MAX_SHIFT: u32 = 60;

/// Decode an encoded polyline into coordinates
///
/// # Errors
///
/// Returns `DomainError::InvalidPolyline` for characters outside the encoding
/// alphabet, truncated values, or decoded points out of coordinate range.
pub fn decode(encoded: &str) -> Result<Vec<Coordinate>, DomainError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut latitude: i64 = 0;
    let mut longitude: i64 = 0;

    while index < bytes.len() {
        latitude = accumulate(latitude, next_delta(bytes, &mut index)?)?;
        longitude = accumulate(longitude, next_delta(bytes, &mut index)?)?;

        #[allow(clippy::cast_precision_loss)] // scaled degrees fit comfortably in f64
        let point = Coordinate::new(latitude as f64 / PRECISION, longitude as f64 / PRECISION)
            .map_err(|_| {
                DomainError::InvalidPolyline(format!("point {} out of range", points.len()))
            })?;
        points.push(point);
    }

    Ok(points)
}

fn accumulate(value: i64, delta: i64) -> Result<i64, DomainError> {
    value
        .checked_add(delta)
        .ok_or_else(|| DomainError::InvalidPolyline("value overflow".to_string()))
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i64, DomainError> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = *bytes
            .get(*index)
            .ok_or_else(|| DomainError::InvalidPolyline("truncated value".to_string()))?;
        *index += 1;

        let chunk = i64::from(byte.checked_sub(CHUNK_OFFSET).ok_or_else(|| {
            DomainError::InvalidPolyline(format!("unexpected character {:?}", char::from(byte)))
        })?);
        if shift > MAX_SHIFT {
            return Err(DomainError::InvalidPolyline("value too long".to_string()));
        }
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;

        if chunk < CONTINUATION_BIT {
            break;
        }
    }

    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(point: &Coordinate, lat: f64, lng: f64) {
        assert!((point.latitude() - lat).abs() < 1e-9, "{point}");
        assert!((point.longitude() - lng).abs() < 1e-9, "{point}");
    }

    #[test]
    fn decodes_reference_polyline() {
        let points = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
        assert_eq!(points.len(), 3);
        assert_close(&points[0], 38.5, -120.2);
        assert_close(&points[1], 40.7, -120.95);
        assert_close(&points[2], 43.252, -126.453);
    }

    #[test]
    fn empty_string_has_no_points() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn repeated_point_uses_zero_delta() {
        let points = decode("_p~iF~ps|U??").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], points[1]);
    }

    #[test]
    fn truncated_input_is_rejected() {
        assert!(matches!(
            decode("_p~iF"),
            Err(DomainError::InvalidPolyline(_))
        ));
    }

    #[test]
    fn character_below_alphabet_is_rejected() {
        assert!(decode("_p~iF ps|U").is_err());
    }
}
