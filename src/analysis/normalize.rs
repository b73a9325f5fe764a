use crate::data::model::{NormalizedProfile, TrimmedProfile};
use crate::error::ProfileError;

/// Rescale the position axis so its minimum maps to 0 and its maximum to 1.
pub fn normalize(profile: &TrimmedProfile) -> Result<NormalizedProfile, ProfileError> {
    let min = profile.position.iter().copied().fold(f64::INFINITY, f64::min);
    let max = profile
        .position
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range.is_nan() || range <= 0.0 {
        return Err(ProfileError::DegenerateRange { value: min });
    }

    Ok(NormalizedProfile {
        position: profile.position.iter().map(|&p| (p - min) / range).collect(),
        intensity: profile.intensity.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ChannelEdges;

    fn trimmed(position: Vec<f64>) -> TrimmedProfile {
        let intensity = vec![1.0; position.len()];
        TrimmedProfile {
            edges: ChannelEdges {
                start: position[0],
                stop: position[position.len() - 1],
            },
            position,
            intensity,
        }
    }

    #[test]
    fn endpoints_map_exactly_to_zero_and_one() {
        let n = normalize(&trimmed(vec![3.7, 4.1, 5.3, 9.9, 12.13])).unwrap();
        let min = n.position.iter().copied().fold(f64::INFINITY, f64::min);
        let max = n.position.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(min, 0.0);
        assert_eq!(max, 1.0);
        assert!(n.position.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn keeps_intensity_untouched() {
        let mut t = trimmed(vec![2.0, 4.0, 6.0]);
        t.intensity = vec![9.0, 8.0, 7.0];
        let n = normalize(&t).unwrap();
        assert_eq!(n.position, vec![0.0, 0.5, 1.0]);
        assert_eq!(n.intensity, vec![9.0, 8.0, 7.0]);
    }

    #[test]
    fn zero_width_is_degenerate() {
        assert!(matches!(
            normalize(&trimmed(vec![5.0, 5.0])),
            Err(ProfileError::DegenerateRange { .. })
        ));
        assert!(matches!(
            normalize(&trimmed(vec![5.0])),
            Err(ProfileError::DegenerateRange { .. })
        ));
    }
}
