use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::MpaError;

/// Embedded CSV data for the UK Marine Protected Area catalog.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/uk_mpas.csv");

/// Represents a UK Marine Protected Area with its registry metadata.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MpaSite {
    /// Site name as published in the designation registry
    pub name: String,
    /// Identifier in the World Database on Protected Areas
    pub wdpa_code: String,
    /// Designated area in hectares (ha)
    pub area_ha: f64,
}

impl MpaSite {
    /// Get the site vector from the embedded catalog CSV.
    pub fn get_site_vector() -> Vec<MpaSite> {
        if let Ok(s) = MpaSite::parse_site_csv(CSV_OBJECT) {
            s
        } else {
            panic!("failed to parse catalog csv")
        }
    }

    fn parse_area(ess: &str) -> f64 {
        let ess_lowered = ess.trim().to_lowercase();
        let ess_lowered_str = ess_lowered.as_str();
        match ess_lowered_str {
            "null" => 0f64,
            "" => 0f64,
            "n/a" => 0f64,
            "na" => 0f64,
            s => s.parse::<f64>().unwrap_or_default(),
        }
    }

    /// Parse a CSV string of MPA records into a vector of sites.
    ///
    /// Expected CSV columns: Site_Name, WDPA_Code, Latitude, Longitude, Area_ha.
    /// Latitude and longitude are accepted but not carried on the record; rows
    /// without a name or WDPA code are skipped.
    pub fn parse_site_csv(csv_object: &str) -> Result<Vec<MpaSite>, MpaError> {
        let mut site_list: Vec<MpaSite> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let rho = row?;
            let name = rho.get(0).unwrap_or_default().trim();
            let wdpa_code = rho.get(1).unwrap_or_default().trim();
            if name.is_empty() || wdpa_code.is_empty() {
                continue;
            }
            let site = MpaSite {
                name: String::from(name),
                wdpa_code: String::from(wdpa_code),
                area_ha: MpaSite::parse_area(rho.get(4).unwrap_or_default()),
            };
            site_list.push(site);
        }
        Ok(site_list)
    }
}

#[cfg(test)]
mod tests {
    use crate::site::MpaSite;

    #[test]
    fn test_site_vector() {
        let sites: Vec<MpaSite> = MpaSite::get_site_vector();
        assert_eq!(sites.len(), 57);
    }

    #[test]
    fn test_known_site() {
        let sites = MpaSite::get_site_vector();
        let lundy = sites
            .iter()
            .find(|s| s.name == "Lundy")
            .expect("Lundy missing from catalog");
        assert_eq!(lundy.wdpa_code, "183032");
        assert!(lundy.area_ha > 0.0);
    }

    #[test]
    fn test_parse_skips_incomplete_rows() {
        let csv = "Site_Name,WDPA_Code,Latitude,Longitude,Area_ha\n\
                   Good Site,12345,50.0,-4.0,100.5\n\
                   ,99999,50.0,-4.0,10.0\n\
                   No Code Site,,50.0,-4.0,10.0\n";
        let sites = MpaSite::parse_site_csv(csv).unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].name, "Good Site");
    }

    #[test]
    fn test_parse_area_lenient() {
        let csv = "Site_Name,WDPA_Code,Latitude,Longitude,Area_ha\n\
                   A,1,50.0,-4.0,N/A\n\
                   B,2,50.0,-4.0,\n\
                   C,3,50.0,-4.0,banana\n";
        let sites = MpaSite::parse_site_csv(csv).unwrap();
        assert_eq!(sites.len(), 3);
        assert!(sites.iter().all(|s| s.area_ha == 0.0));
    }
}
