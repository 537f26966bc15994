//! Built-in default content, written the first time a data file is read
//! and found missing.

use std::collections::BTreeMap;

use crate::models::{
    BlogPost, Chapter, ChapterEvent, ChapterProject, ChapterTeamMember, ContactInfo, Event,
    Faculty, GalleryItem, LinkResource, MapLocation, SiteSettings, SocialLinks, TeamData,
    TeamMember,
};

fn social_links() -> SocialLinks {
    SocialLinks {
        facebook: "https://www.facebook.com/ieeepesce".to_string(),
        instagram: "https://www.instagram.com/ieee_pesce".to_string(),
        linkedin: "https://www.linkedin.com/company/ieee-pesce".to_string(),
        twitter: String::new(),
        youtube: String::new(),
    }
}

pub fn upcoming_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            title: "Intro to Embedded Systems Workshop".to_string(),
            description: "Hands-on session on microcontroller programming with Arduino and ESP32."
                .to_string(),
            date: "2025-03-15".to_string(),
            time: "10:00 AM".to_string(),
            location: "ECE Seminar Hall, PESCE Mandya".to_string(),
            category: "workshop".to_string(),
            image: "/images/events/embedded-workshop.jpg".to_string(),
            registration_required: true,
            registration_link: None,
            featured: true,
        },
        Event {
            id: 2,
            title: "Power & Energy Society Tech Talk".to_string(),
            description: "Industry talk on smart grids and renewable energy integration."
                .to_string(),
            date: "2025-04-05".to_string(),
            time: "2:30 PM".to_string(),
            location: "EEE Department Auditorium".to_string(),
            category: "talk".to_string(),
            image: "/images/events/pes-talk.jpg".to_string(),
            registration_required: false,
            registration_link: None,
            featured: false,
        },
    ]
}

pub fn past_events() -> Vec<Event> {
    Vec::new()
}

pub fn chapters() -> BTreeMap<String, Chapter> {
    let list = vec![
        Chapter {
            id: "computer-society".to_string(),
            name: "IEEE Computer Society".to_string(),
            description: "Software, AI and computing activities of the branch.".to_string(),
            image: "/images/chapters/cs.png".to_string(),
            projects: vec![ChapterProject {
                title: "Campus Event Portal".to_string(),
                description: "Web portal for branch event registrations.".to_string(),
                image: None,
                link: None,
            }],
            events: vec![ChapterEvent {
                title: "Code Sprint".to_string(),
                date: "2024-11-20".to_string(),
                description: "24-hour competitive programming contest.".to_string(),
            }],
            team: vec![ChapterTeamMember {
                name: "Chapter Chair".to_string(),
                position: "Chair".to_string(),
                image: None,
            }],
        },
        Chapter {
            id: "power-energy-society".to_string(),
            name: "IEEE Power & Energy Society".to_string(),
            description: "Power systems, renewables and energy research.".to_string(),
            image: "/images/chapters/pes.png".to_string(),
            projects: Vec::new(),
            events: Vec::new(),
            team: Vec::new(),
        },
        Chapter {
            id: "robotics-automation-society".to_string(),
            name: "IEEE Robotics & Automation Society".to_string(),
            description: "Robotics builds, competitions and automation workshops.".to_string(),
            image: "/images/chapters/ras.png".to_string(),
            projects: Vec::new(),
            events: Vec::new(),
            team: Vec::new(),
        },
    ];

    list.into_iter().map(|c| (c.id.clone(), c)).collect()
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![BlogPost {
        id: 1,
        title: "Welcome to IEEE PESCE".to_string(),
        excerpt: "What the student branch is about and how to get involved.".to_string(),
        content: "<p>The IEEE PESCE Student Branch brings together students passionate about technology.</p>"
            .to_string(),
        author: "IEEE PESCE".to_string(),
        date: "2024-08-01".to_string(),
        category: "news".to_string(),
        image: "/images/blog/welcome.jpg".to_string(),
        featured: true,
        published: true,
    }]
}

pub fn gallery() -> Vec<GalleryItem> {
    vec![GalleryItem {
        id: "gallery-1722470400000".to_string(),
        title: "Branch Inauguration".to_string(),
        category: "events".to_string(),
        date: "2024-08-01".to_string(),
        location: "PESCE Mandya".to_string(),
        description: "Inauguration of the student branch office bearers.".to_string(),
        images: vec!["/images/gallery/events/inauguration-1.jpg".to_string()],
        thumbnail: "/images/gallery/events/inauguration-1.jpg".to_string(),
    }]
}

pub fn team() -> TeamData {
    TeamData {
        members: vec![
            TeamMember {
                id: "member-1".to_string(),
                name: "Branch Chair".to_string(),
                position: "Chairperson".to_string(),
                department: "Electronics & Communication".to_string(),
                image: "/images/team/members/chair.jpg".to_string(),
                email: None,
                linkedin: None,
                github: None,
            },
            TeamMember {
                id: "member-2".to_string(),
                name: "Branch Secretary".to_string(),
                position: "Secretary".to_string(),
                department: "Computer Science".to_string(),
                image: "/images/team/members/secretary.jpg".to_string(),
                email: None,
                linkedin: None,
                github: None,
            },
        ],
        faculty: vec![Faculty {
            id: "faculty-1".to_string(),
            name: "Branch Counsellor".to_string(),
            position: "Branch Counsellor".to_string(),
            department: "Electrical & Electronics".to_string(),
            image: "/images/team/faculty/counsellor.jpg".to_string(),
            email: None,
        }],
    }
}

pub fn resources() -> Vec<LinkResource> {
    vec![
        LinkResource {
            id: "2f1c6a53-3d55-4f43-9d44-8f3f4c1b2a01".to_string(),
            title: "IEEE Xplore Digital Library".to_string(),
            kind: "website".to_string(),
            category: "research".to_string(),
            link: "https://ieeexplore.ieee.org".to_string(),
            description: "Journals, conference papers and standards.".to_string(),
            tags: vec!["papers".to_string(), "research".to_string()],
            featured: true,
        },
        LinkResource {
            id: "7b9d2e10-5a61-4c8e-b1f2-0c4d3e2a9f12".to_string(),
            title: "IEEE Collabratec".to_string(),
            kind: "website".to_string(),
            category: "community".to_string(),
            link: "https://ieee-collabratec.ieee.org".to_string(),
            description: "Networking and collaboration platform for members.".to_string(),
            tags: vec!["community".to_string()],
            featured: false,
        },
    ]
}

pub fn settings() -> SiteSettings {
    SiteSettings {
        site_title: "IEEE PESCE Student Branch".to_string(),
        site_description: "IEEE Student Branch of PES College of Engineering, Mandya".to_string(),
        contact_email: "ieee@pesce.ac.in".to_string(),
        contact_phone: String::new(),
        address: "PES College of Engineering, Mandya, Karnataka 571401".to_string(),
        social: social_links(),
        membership_form_url: String::new(),
        membership_fee: "INR 1500".to_string(),
    }
}

pub fn contact() -> ContactInfo {
    ContactInfo {
        address: "PES College of Engineering, Mandya, Karnataka 571401".to_string(),
        email: "ieee@pesce.ac.in".to_string(),
        phone: String::new(),
        map: MapLocation {
            lat: 12.5218,
            lng: 76.8951,
            zoom: 15,
        },
        social: social_links(),
    }
}
