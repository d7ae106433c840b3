//! Copy and mock figures for the landing, info, team and dashboard menu pages.

pub const BRAND_NAME: &str = "HAWA HP";
pub const BRAND_TAGLINE: &str = "Beyond the sky";

pub struct Hero {
	pub badge: &'static str,
	pub title: &'static str,
	pub subtitle: &'static str,
}

pub const HERO: Hero = Hero {
	badge: "HAWA HP - Beyond the sky",
	title: "Explore the Universe of Exoplanets with AI",
	subtitle: "Discover worlds beyond our solar system using the power of artificial intelligence",
};

pub struct Intro {
	pub overline: &'static str,
	pub title: &'static str,
	pub paragraphs: [&'static str; 2],
	pub features: [&'static str; 3],
}

pub const INTRO: Intro = Intro {
	overline: "Welcome to HAWA HP",
	title: "Your Window to the Cosmos",
	paragraphs: [
		"HAWA HP is an educational and interactive platform that combines modern astronomy with the power of artificial intelligence to democratize knowledge about exoplanets.",
		"Whether you are a curious student, a passionate educator, or a space enthusiast, you will find the tools here to explore, learn, and predict the existence of worlds beyond our solar system.",
	],
	features: ["Advanced AI", "Real NASA Data", "Interactive Exploration"],
};

/// A labeled count plotted on the statistics bar charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountPoint {
	pub label: &'static str,
	pub count: u32,
}

const fn count(label: &'static str, count: u32) -> CountPoint {
	CountPoint { label, count }
}

pub const DISCOVERIES_PER_YEAR: [CountPoint; 6] = [
	count("2014", 715),
	count("2016", 1284),
	count("2018", 95),
	count("2020", 320),
	count("2022", 178),
	count("2024", 245),
];

pub const DISCOVERIES_PER_MISSION: [CountPoint; 4] = [
	count("Kepler", 2662),
	count("TESS", 388),
	count("K2", 512),
	count("Others", 246),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MainStats {
	pub exoplanets: u32,
	pub predictions: u32,
	/// Percent.
	pub accuracy: u32,
}

pub const MAIN_STATS: MainStats = MainStats {
	exoplanets: 5539,
	predictions: 12847,
	accuracy: 85,
};

pub struct Dataset {
	pub name: &'static str,
	pub description: &'static str,
	pub link: &'static str,
	pub updated: &'static str,
}

pub const NASA_DATASETS: [Dataset; 3] = [
	Dataset {
		name: "Kepler Objects of Interest (KOI)",
		description: "Data from the Kepler mission with over 2,600 confirmed exoplanets",
		link: "https://exoplanetarchive.ipac.caltech.edu/cgi-bin/TblView/nph-tblView?app=ExoTbls&config=cumulative",
		updated: "2024",
	},
	Dataset {
		name: "K2 Planets and Candidates",
		description: "Dataset from the K2 mission with candidate and confirmed exoplanets",
		link: "https://exoplanetarchive.ipac.caltech.edu/cgi-bin/TblView/nph-tblView?app=ExoTbls&config=k2pandc",
		updated: "2024",
	},
	Dataset {
		name: "TESS Objects of Interest (TOI)",
		description: "Recent data from the Transiting Exoplanet Survey Satellite",
		link: "https://exoplanetarchive.ipac.caltech.edu/cgi-bin/TblView/nph-tblView?app=ExoTbls&config=TOI",
		updated: "2024",
	},
];

/// A titled paragraph. Used for the info cards, the prediction steps and the dashboard menu.
pub struct Topic {
	pub title: &'static str,
	pub description: &'static str,
}

pub const EXOPLANET_INFO: [Topic; 3] = [
	Topic {
		title: "Habitable Zone",
		description: "Region where liquid water can exist on the surface",
	},
	Topic {
		title: "Detection Methods",
		description: "Transit, radial velocity, direct imaging, and microlensing",
	},
	Topic {
		title: "Types of Exoplanets",
		description: "Gas giants, super-Earths, hot Neptunes, and more",
	},
];

pub const EXOPLANET_SUMMARY: &str = "Exoplanets, or extrasolar planets, are worlds that orbit stars other than our Sun. Since the first confirmed exoplanet was discovered in 1992, more than 5,500 of these fascinating worlds have been found.";

pub const PREDICTION_STEPS: [Topic; 4] = [
	Topic {
		title: "Data Collection",
		description: "We gather light curve, planetary transit, and stellar feature data from official databases.",
	},
	Topic {
		title: "AI Processing",
		description: "Our ML models analyze complex patterns in the data to identify exoplanet signals.",
	},
	Topic {
		title: "Probabilistic Analysis",
		description: "We calculate the probability that a signal corresponds to a real exoplanet versus a false positive.",
	},
	Topic {
		title: "Accurate Results",
		description: "We obtain highly accurate predictions (>94%) validated against confirmed data.",
	},
];

pub const VISUALIZATION_STATS: [(&str, &str); 4] = [
	("Stellar Systems", "4,123"),
	("Habitable Zone", "342"),
	("Active Candidates", "2,889"),
	("Confirmed 2024", "245"),
];

pub const CTA_TITLE: &str = "Ready to Explore the Universe?";
pub const CTA_DESCRIPTION: &str = "Create your free account and access advanced prediction tools, train your own AI models, and join the community of space explorers.";

pub const ACCOUNT_BENEFITS: [&str; 4] = [
	"Train custom models",
	"Upload your own datasets",
	"Save and share results",
	"Access to Fine Tuning",
];

pub const FOOTER_PLATFORM_LINKS: [&str; 4] = ["Explore", "Prediction", "Training", "Datasets"];
pub const FOOTER_RESOURCE_LINKS: [&str; 4] = ["Documentation", "API", "Tutorials", "Blog"];
pub const FOOTER_COPYRIGHT: &str = "All rights reserved. | Data provided by the NASA Exoplanet Archive";

/// An entry on the dashboard menu.
pub struct MenuItem {
	pub step: &'static str,
	pub topic: Topic,
	pub href: &'static str,
}

pub const DASHBOARD_TITLE: &str = "What will our mission be today?";

pub const DASHBOARD_MENU: [MenuItem; 3] = [
	MenuItem {
		step: "01",
		topic: Topic {
			title: "Batch Prediction",
			description: "Upload a catalog of objects of interest and classify all of them at once.",
		},
		href: "/dashboard/batch",
	},
	MenuItem {
		step: "02",
		topic: Topic {
			title: "Model Training",
			description: "Tune the hyperparameters and train a model on your own dataset.",
		},
		href: "/dashboard/training",
	},
	MenuItem {
		step: "03",
		topic: Topic {
			title: "Analytics",
			description: "Compare the evaluation metrics of the Kepler, TESS and K2 models.",
		},
		href: "/dashboard/analytics",
	},
];

pub struct TeamMember {
	pub name: &'static str,
	pub role: &'static str,
	pub degree: &'static str,
	pub status: &'static str,
	pub university: &'static str,
	pub linkedin: &'static str,
	pub github: &'static str,
	pub accent_color: &'static str,
}

pub const TEAM_TITLE: &str = "The Team Behind HAWA HP";
pub const TEAM_SUBTITLE: &str = "Students and professionals passionate about space and technology";

const UNIVERSITY: &str = "Universidad Nacional de San Antonio Abad del Cusco";

pub const TEAM_MEMBERS: [TeamMember; 6] = [
	TeamMember {
		name: "Developer One",
		role: "Frontend Developer",
		degree: "Software Engineering",
		status: "5th Semester",
		university: UNIVERSITY,
		linkedin: "https://linkedin.com/in/usuario1",
		github: "https://github.com/usuario1",
		accent_color: "#6366f1",
	},
	TeamMember {
		name: "Developer Two",
		role: "Backend Developer",
		degree: "Software Engineer",
		status: "Graduated 2023",
		university: UNIVERSITY,
		linkedin: "https://linkedin.com/in/usuario2",
		github: "https://github.com/usuario2",
		accent_color: "#8b5cf6",
	},
	TeamMember {
		name: "Developer Three",
		role: "UI/UX Designer",
		degree: "Graphic Design",
		status: "6th Semester",
		university: UNIVERSITY,
		linkedin: "https://linkedin.com/in/usuario3",
		github: "https://github.com/usuario3",
		accent_color: "#06b6d4",
	},
	TeamMember {
		name: "Developer Four",
		role: "Data Scientist",
		degree: "Systems Engineering",
		status: "7th Semester",
		university: UNIVERSITY,
		linkedin: "https://linkedin.com/in/usuario4",
		github: "https://github.com/usuario4",
		accent_color: "#ec4899",
	},
	TeamMember {
		name: "Gian Franco Charalla Ccama",
		role: "Frontend Developer",
		degree: "Computer Engineering",
		status: "8th Semester",
		university: UNIVERSITY,
		linkedin: "https://www.linkedin.com/in/gian-franco-charalla-464b42271",
		github: "https://github.com/NXT-CRAZZY",
		accent_color: "#10b981",
	},
	TeamMember {
		name: "Developer Six",
		role: "DevOps Engineer",
		degree: "Software Engineer",
		status: "Graduated 2024",
		university: UNIVERSITY,
		linkedin: "https://linkedin.com/in/usuario6",
		github: "https://github.com/usuario6",
		accent_color: "#f59e0b",
	},
];

/// Format a count with thousands separators, e.g. `12,847`.
pub fn format_count(value: u32) -> String {
	let digits = value.to_string();
	let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			formatted.push(',');
		}
		formatted.push(c);
	}
	formatted
}

#[test]
fn test_format_count() {
	assert_eq!(format_count(0), "0");
	assert_eq!(format_count(715), "715");
	assert_eq!(format_count(5539), "5,539");
	assert_eq!(format_count(12847), "12,847");
	assert_eq!(format_count(1234567), "1,234,567");
}
