// src/models/contact.rs
// DOCUMENTATION: Public contact details served by GET /api/contact

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LabeledLine {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub hotel_name: &'static str,
    pub address_lines: Vec<&'static str>,
    pub phones: Vec<LabeledLine>,
    pub email: &'static str,
    pub reception_hours: Vec<LabeledLine>,
    pub quick_services: Vec<&'static str>,
}

impl ContactInfo {
    pub fn dolly_hotel() -> Self {
        ContactInfo {
            hotel_name: "Dolly Hotel",
            address_lines: vec![
                "1no. Netaji Park, G.T. Road (Dolly Pharmacy)",
                "Bandel, Hooghly, 712123",
                "India",
            ],
            phones: vec![
                LabeledLine {
                    label: "Main",
                    value: "+91 8777659544",
                },
                LabeledLine {
                    label: "Reservations",
                    value: "+91 8777651011",
                },
            ],
            email: "dollyhotelbandel@gmail.com",
            reception_hours: vec![
                LabeledLine {
                    label: "Check-in",
                    value: "10:00 AM",
                },
                LabeledLine {
                    label: "Check-out",
                    value: "9:30 AM",
                },
                LabeledLine {
                    label: "Hourly Booking Ends At",
                    value: "7:00 PM",
                },
            ],
            quick_services: vec!["24/7 Room Service"],
        }
    }
}
