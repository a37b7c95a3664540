use crate::models::blood_bank::BloodBank;
use crate::models::user::BloodGroup::{self, *};

/// Donation centers in Karachi shown on the dashboard
pub static BLOOD_BANKS: &[BloodBank] = &[
    BloodBank {
        name: "City Blood Bank",
        area: "Saddar",
        contact: "0301-1234567",
        blood_groups: &[APositive, BPositive],
    },
    BloodBank {
        name: "LifeSaver Blood Center",
        area: "Gulshan",
        contact: "0302-2345678",
        blood_groups: &[OPositive, AbPositive],
    },
    BloodBank {
        name: "Hope Transfusion Services",
        area: "Clifton",
        contact: "0303-3456789",
        blood_groups: &[ANegative, ONegative, OPositive],
    },
    BloodBank {
        name: "Red Crescent Donor Center",
        area: "Saddar",
        contact: "0304-4567890",
        blood_groups: &[BNegative, AbNegative, OPositive],
    },
    BloodBank {
        name: "Nazimabad Community Blood Bank",
        area: "North Nazimabad",
        contact: "0305-5678901",
        blood_groups: &[APositive, ANegative, BPositive, BNegative],
    },
    BloodBank {
        name: "Korangi Regional Blood Center",
        area: "Korangi",
        contact: "0306-6789012",
        blood_groups: &[
            APositive, ANegative, BPositive, BNegative, OPositive, ONegative, AbPositive,
            AbNegative,
        ],
    },
];

/// Banks stocking `group`, in directory order
pub fn by_blood_group(group: BloodGroup) -> Vec<&'static BloodBank> {
    BLOOD_BANKS.iter().filter(|bank| bank.stocks(group)).collect()
}

/// Banks located in `area` (ASCII case-insensitive), in directory order
pub fn by_area(area: &str) -> Vec<&'static BloodBank> {
    BLOOD_BANKS.iter().filter(|bank| bank.is_in(area)).collect()
}

/// Distinct areas in directory order
pub fn areas() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for bank in BLOOD_BANKS {
        if !seen.contains(&bank.area) {
            seen.push(bank.area);
        }
    }
    seen
}

pub fn is_known_area(area: &str) -> bool {
    BLOOD_BANKS.iter().any(|bank| bank.is_in(area))
}
