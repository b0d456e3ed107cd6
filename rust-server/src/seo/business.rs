//! `MedicalClinic` (LocalBusiness) schema for the clinic profile.

use serde::Serialize;

use crate::content::SiteSettings;

use super::types::{GeoCoordinates, ImageObject, Organization, PostalAddress, SCHEMA_CONTEXT};

/// Fallback clinic identity, used wherever settings are missing a field.
pub const DEFAULT_CLINIC_NAME: &str = "Clínica VidaMed";
pub const DEFAULT_LOGO_URL: &str = "https://www.clinicavidamed.com.br/images/logo.png";

const DEFAULT_PHONE: &str = "+55 11 3456-7890";
const DEFAULT_EMAIL: &str = "contato@clinicavidamed.com.br";
const DEFAULT_STREET: &str = "Av. Paulista, 1000 - Sala 101";
const DEFAULT_CITY: &str = "São Paulo";
const DEFAULT_STATE: &str = "SP";
const DEFAULT_POSTAL_CODE: &str = "01310-100";
const DEFAULT_LATITUDE: f64 = -23.5614;
const DEFAULT_LONGITUDE: f64 = -46.6559;
const DEFAULT_OPENING_HOURS: &[&str] = &["Mo-Fr 08:00-18:00", "Sa 08:00-12:00"];

/// Publisher node shared with the article and video schemas.
pub(super) fn publisher_from(settings: Option<&SiteSettings>) -> Organization {
    let name = settings
        .and_then(|s| s.clinic_name.clone())
        .unwrap_or_else(|| DEFAULT_CLINIC_NAME.to_string());
    let logo_url = settings
        .and_then(|s| s.logo_url.clone())
        .unwrap_or_else(|| DEFAULT_LOGO_URL.to_string());

    Organization {
        schema_type: "Organization",
        name,
        logo: Some(ImageObject::new(logo_url)),
    }
}

/// `MedicalClinic` JSON-LD root object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusinessSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub url: String,
    pub logo: ImageObject,
    pub telephone: String,
    pub email: String,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    pub opening_hours: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

/// Build the clinic profile schema, merging configured business data with
/// fixed fallback defaults for every field. Never fails, even with an
/// entirely empty settings object.
pub fn local_business_schema(settings: &SiteSettings, site_url: &str) -> LocalBusinessSchema {
    let address = settings.address.clone().unwrap_or_default();

    let opening_hours = if settings.opening_hours.is_empty() {
        DEFAULT_OPENING_HOURS.iter().map(|h| h.to_string()).collect()
    } else {
        settings.opening_hours.clone()
    };

    let (latitude, longitude) = settings
        .geo
        .map(|geo| (geo.lat, geo.lng))
        .unwrap_or((DEFAULT_LATITUDE, DEFAULT_LONGITUDE));

    LocalBusinessSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "MedicalClinic",
        name: settings
            .clinic_name
            .clone()
            .unwrap_or_else(|| DEFAULT_CLINIC_NAME.to_string()),
        url: site_url.to_string(),
        logo: ImageObject::new(
            settings
                .logo_url
                .clone()
                .unwrap_or_else(|| DEFAULT_LOGO_URL.to_string()),
        ),
        telephone: settings
            .phone
            .clone()
            .unwrap_or_else(|| DEFAULT_PHONE.to_string()),
        email: settings
            .email
            .clone()
            .unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
        address: PostalAddress {
            schema_type: "PostalAddress",
            street_address: address
                .street
                .unwrap_or_else(|| DEFAULT_STREET.to_string()),
            address_locality: address.city.unwrap_or_else(|| DEFAULT_CITY.to_string()),
            address_region: address.state.unwrap_or_else(|| DEFAULT_STATE.to_string()),
            postal_code: address
                .postal_code
                .unwrap_or_else(|| DEFAULT_POSTAL_CODE.to_string()),
            address_country: "BR",
        },
        geo: GeoCoordinates {
            schema_type: "GeoCoordinates",
            latitude,
            longitude,
        },
        opening_hours,
        same_as: settings.social_profiles.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SITE_URL;
    use crate::content::{Address, GeoPoint};

    #[test]
    fn test_empty_settings_get_full_defaults() {
        let schema = local_business_schema(&SiteSettings::default(), DEFAULT_SITE_URL);

        assert_eq!(schema.schema_type, "MedicalClinic");
        assert_eq!(schema.name, DEFAULT_CLINIC_NAME);
        assert_eq!(schema.telephone, DEFAULT_PHONE);
        assert_eq!(schema.address.address_locality, DEFAULT_CITY);
        assert_eq!(schema.address.address_country, "BR");
        assert_eq!(schema.geo.latitude, DEFAULT_LATITUDE);
        assert_eq!(schema.opening_hours.len(), 2);

        // No social profiles configured: sameAs omitted from the output.
        let json = serde_json::to_value(&schema).unwrap();
        assert!(json.get("sameAs").is_none());
    }

    #[test]
    fn test_partial_settings_override_only_their_fields() {
        let settings = SiteSettings {
            clinic_name: Some("Clínica Bela Pele".to_string()),
            phone: Some("+55 21 99999-0000".to_string()),
            address: Some(Address {
                city: Some("Rio de Janeiro".to_string()),
                ..Address::default()
            }),
            geo: Some(GeoPoint {
                lat: -22.9068,
                lng: -43.1729,
            }),
            social_profiles: vec!["https://instagram.com/belapele".to_string()],
            ..SiteSettings::default()
        };

        let schema = local_business_schema(&settings, DEFAULT_SITE_URL);

        assert_eq!(schema.name, "Clínica Bela Pele");
        assert_eq!(schema.telephone, "+55 21 99999-0000");
        assert_eq!(schema.address.address_locality, "Rio de Janeiro");
        // Unset address fields keep the defaults.
        assert_eq!(schema.address.street_address, DEFAULT_STREET);
        assert_eq!(schema.geo.longitude, -43.1729);
        assert_eq!(schema.same_as.len(), 1);
    }
}
