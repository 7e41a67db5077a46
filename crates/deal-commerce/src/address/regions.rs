//! Region tables.

use super::RegionOption;

/// The 50 US states plus the District of Columbia.
pub const US_STATES: &[RegionOption] = &[
    RegionOption::new("AL", "Alabama"),
    RegionOption::new("AK", "Alaska"),
    RegionOption::new("AZ", "Arizona"),
    RegionOption::new("AR", "Arkansas"),
    RegionOption::new("CA", "California"),
    RegionOption::new("CO", "Colorado"),
    RegionOption::new("CT", "Connecticut"),
    RegionOption::new("DE", "Delaware"),
    RegionOption::new("DC", "District of Columbia"),
    RegionOption::new("FL", "Florida"),
    RegionOption::new("GA", "Georgia"),
    RegionOption::new("HI", "Hawaii"),
    RegionOption::new("ID", "Idaho"),
    RegionOption::new("IL", "Illinois"),
    RegionOption::new("IN", "Indiana"),
    RegionOption::new("IA", "Iowa"),
    RegionOption::new("KS", "Kansas"),
    RegionOption::new("KY", "Kentucky"),
    RegionOption::new("LA", "Louisiana"),
    RegionOption::new("ME", "Maine"),
    RegionOption::new("MD", "Maryland"),
    RegionOption::new("MA", "Massachusetts"),
    RegionOption::new("MI", "Michigan"),
    RegionOption::new("MN", "Minnesota"),
    RegionOption::new("MS", "Mississippi"),
    RegionOption::new("MO", "Missouri"),
    RegionOption::new("MT", "Montana"),
    RegionOption::new("NE", "Nebraska"),
    RegionOption::new("NV", "Nevada"),
    RegionOption::new("NH", "New Hampshire"),
    RegionOption::new("NJ", "New Jersey"),
    RegionOption::new("NM", "New Mexico"),
    RegionOption::new("NY", "New York"),
    RegionOption::new("NC", "North Carolina"),
    RegionOption::new("ND", "North Dakota"),
    RegionOption::new("OH", "Ohio"),
    RegionOption::new("OK", "Oklahoma"),
    RegionOption::new("OR", "Oregon"),
    RegionOption::new("PA", "Pennsylvania"),
    RegionOption::new("RI", "Rhode Island"),
    RegionOption::new("SC", "South Carolina"),
    RegionOption::new("SD", "South Dakota"),
    RegionOption::new("TN", "Tennessee"),
    RegionOption::new("TX", "Texas"),
    RegionOption::new("UT", "Utah"),
    RegionOption::new("VT", "Vermont"),
    RegionOption::new("VA", "Virginia"),
    RegionOption::new("WA", "Washington"),
    RegionOption::new("WV", "West Virginia"),
    RegionOption::new("WI", "Wisconsin"),
    RegionOption::new("WY", "Wyoming"),
];

/// Canadian provinces and territories.
pub const CA_PROVINCES: &[RegionOption] = &[
    RegionOption::new("AB", "Alberta"),
    RegionOption::new("BC", "British Columbia"),
    RegionOption::new("MB", "Manitoba"),
    RegionOption::new("NB", "New Brunswick"),
    RegionOption::new("NL", "Newfoundland and Labrador"),
    RegionOption::new("NS", "Nova Scotia"),
    RegionOption::new("NT", "Northwest Territories"),
    RegionOption::new("NU", "Nunavut"),
    RegionOption::new("ON", "Ontario"),
    RegionOption::new("PE", "Prince Edward Island"),
    RegionOption::new("QC", "Quebec"),
    RegionOption::new("SK", "Saskatchewan"),
    RegionOption::new("YT", "Yukon"),
];
