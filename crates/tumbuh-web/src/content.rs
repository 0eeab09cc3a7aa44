//! Static Page Content
//!
//! Copy for the marketing and legal pages, kept out of the view code.

// ============================================================================
// Features
// ============================================================================

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent class for the icon tile
    pub tone: &'static str,
}

pub const FEATURES: [Feature; 9] = [
    Feature {
        icon: "🔗",
        title: "Satu Link, Semua Platform",
        description: "Gabungkan Instagram, TikTok, YouTube, Facebook, dan platform lainnya dalam satu link yang mudah dibagikan.",
        tone: "tone-primary",
    },
    Feature {
        icon: "📱",
        title: "Mobile-First Design",
        description: "Tampilan yang dioptimalkan untuk mobile, sempurna untuk audience Indonesia yang mayoritas menggunakan smartphone.",
        tone: "tone-secondary",
    },
    Feature {
        icon: "📊",
        title: "Analytics Lengkap",
        description: "Pantau performa link Anda dengan analytics detail, termasuk klik, views, dan demografi pengunjung.",
        tone: "tone-green",
    },
    Feature {
        icon: "🛡️",
        title: "Keamanan Terjamin",
        description: "Data Anda aman dengan enkripsi tingkat enterprise dan tidak akan dibagikan ke pihak ketiga.",
        tone: "tone-blue",
    },
    Feature {
        icon: "⚡",
        title: "Setup Super Cepat",
        description: "Buat halaman link-in-bio profesional hanya dalam 2 menit. Tidak perlu coding atau design skill.",
        tone: "tone-yellow",
    },
    Feature {
        icon: "🌐",
        title: "Custom Domain",
        description: "Gunakan domain sendiri untuk branding yang lebih profesional dan memorable.",
        tone: "tone-purple",
    },
    Feature {
        icon: "👥",
        title: "Khusus Indonesia",
        description: "Dirancang khusus untuk content creator dan brand Indonesia dengan dukungan bahasa lokal.",
        tone: "tone-red",
    },
    Feature {
        icon: "❤️",
        title: "Gratis Selamanya",
        description: "Semua fitur dasar gratis tanpa batas waktu. Tidak ada biaya tersembunyi atau subscription wajib.",
        tone: "tone-pink",
    },
    Feature {
        icon: "⭐",
        title: "Support 24/7",
        description: "Tim support Indonesia siap membantu Anda kapan saja via WhatsApp, email, atau live chat.",
        tone: "tone-orange",
    },
];

/// The three shown on the landing page
pub fn highlights() -> &'static [Feature] {
    &FEATURES[..3]
}

pub const HERO_CHECKS: [&str; 3] = ["Gratis selamanya", "Setup dalam 2 menit", "Mobile-friendly"];

// ============================================================================
// Long-form documents
// ============================================================================

/// List entry with an optional bold lead-in
#[derive(Clone, Copy, Debug)]
pub struct Item {
    pub term: Option<&'static str>,
    pub text: &'static str,
}

const fn item(text: &'static str) -> Item {
    Item { term: None, text }
}

const fn term(term: &'static str, text: &'static str) -> Item {
    Item { term: Some(term), text }
}

#[derive(Clone, Copy, Debug)]
pub struct Section {
    pub heading: &'static str,
    pub paragraph: Option<&'static str>,
    pub items: &'static [Item],
}

#[derive(Clone, Copy, Debug)]
pub struct Document {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: &'static [Section],
}

pub const ABOUT: Document = Document {
    title: "Tentang Tumbuh Ide Indonesia",
    subtitle: "Platform yang lahir dari kepedulian terhadap perkembangan ekosistem digital Indonesia",
    sections: &[
        Section {
            heading: "Misi Kami",
            paragraph: Some("Tumbuh Ide Indonesia hadir untuk memberdayakan content creator dan brand lokal dalam memaksimalkan potensi digital mereka. Kami percaya bahwa setiap creator dan brand Indonesia memiliki cerita unik yang layak untuk didengar dan dilihat oleh dunia."),
            items: &[],
        },
        Section {
            heading: "Visi Kami",
            paragraph: Some("Menjadi platform pilihan utama bagi content creator dan brand Indonesia untuk membangun presence digital yang kuat, profesional, dan mudah diakses oleh audience mereka."),
            items: &[],
        },
        Section {
            heading: "Mengapa Fokus di Surabaya, Gresik, dan Sidoarjo?",
            paragraph: Some("Kami memulai dari wilayah Jawa Timur karena melihat potensi besar ekosistem digital yang sedang berkembang pesat di daerah ini. Surabaya sebagai kota metropolitan kedua di Indonesia, ditambah dengan Gresik dan Sidoarjo yang memiliki komunitas bisnis dan creator yang aktif, menjadi fondasi yang sempurna untuk memulai misi kami."),
            items: &[],
        },
        Section {
            heading: "Komitmen Kami",
            paragraph: None,
            items: &[
                term("Gratis untuk Semua:", "Akses tanpa biaya untuk semua fitur dasar"),
                term("Mobile-First:", "Dirancang khusus untuk pengguna mobile Indonesia"),
                term("Dukungan Lokal:", "Tim support yang memahami kebutuhan creator Indonesia"),
                term("Privacy First:", "Data Anda aman dan tidak akan dibagikan ke pihak ketiga"),
            ],
        },
    ],
};

const LAST_UPDATED: &str = "Terakhir diperbarui: 30 Mei 2025";

pub const TERMS: Document = Document {
    title: "Syarat & Ketentuan",
    subtitle: LAST_UPDATED,
    sections: &[
        Section {
            heading: "1. Penerimaan Syarat",
            paragraph: Some("Dengan menggunakan platform Tumbuh Ide Indonesia, Anda menyetujui untuk terikat oleh syarat dan ketentuan ini. Jika Anda tidak setuju dengan syarat ini, mohon untuk tidak menggunakan layanan kami."),
            items: &[],
        },
        Section {
            heading: "2. Definisi Layanan",
            paragraph: Some("Tumbuh Ide Indonesia adalah platform link-in-bio yang memungkinkan pengguna untuk membuat halaman profil yang menghubungkan semua akun sosial media dan link custom dalam satu tempat."),
            items: &[],
        },
        Section {
            heading: "3. Persyaratan Pengguna",
            paragraph: None,
            items: &[
                item("Usia minimum 17 tahun atau sudah memiliki KTP"),
                item("Memberikan informasi yang akurat dan benar"),
                item("Bertanggung jawab atas keamanan akun"),
                item("Tidak menggunakan platform untuk kegiatan ilegal"),
            ],
        },
        Section {
            heading: "4. Konten Pengguna",
            paragraph: Some("Anda bertanggung jawab penuh atas konten yang Anda unggah. Konten tidak boleh melanggar hukum, mengandung SARA, pornografi, atau merugikan pihak lain."),
            items: &[],
        },
        Section {
            heading: "5. Privasi Data",
            paragraph: Some("Kami berkomitmen melindungi data pribadi Anda sesuai dengan Kebijakan Privasi yang terpisah. Data tidak akan dibagikan kepada pihak ketiga tanpa persetujuan Anda."),
            items: &[],
        },
        Section {
            heading: "6. Pembatasan Layanan",
            paragraph: Some("Kami berhak menghentikan atau membatasi layanan jika terjadi pelanggaran syarat dan ketentuan, tanpa pemberitahuan sebelumnya."),
            items: &[],
        },
        Section {
            heading: "7. Perubahan Syarat",
            paragraph: Some("Syarat dan ketentuan dapat berubah sewaktu-waktu. Perubahan akan diberitahukan melalui email atau notifikasi di platform."),
            items: &[],
        },
        Section {
            heading: "8. Kontak",
            paragraph: Some("Jika ada pertanyaan mengenai syarat dan ketentuan ini, silakan hubungi kami di support@tumbuhide.com"),
            items: &[],
        },
    ],
};

pub const PRIVACY: Document = Document {
    title: "Kebijakan Privasi",
    subtitle: LAST_UPDATED,
    sections: &[
        Section {
            heading: "1. Informasi yang Kami Kumpulkan",
            paragraph: None,
            items: &[
                term("Data Profil:", "Nama, email, username, bio, foto profil"),
                term("Data Penggunaan:", "Analytics klik, views, perangkat yang digunakan"),
                term("Data Teknis:", "IP address (di-hash untuk privasi), browser, sistem operasi"),
            ],
        },
        Section {
            heading: "2. Bagaimana Kami Menggunakan Data",
            paragraph: None,
            items: &[
                item("Menyediakan dan meningkatkan layanan"),
                item("Menampilkan analytics penggunaan"),
                item("Komunikasi terkait layanan"),
                item("Keamanan dan pencegahan spam"),
            ],
        },
        Section {
            heading: "3. Pembagian Data",
            paragraph: Some("Kami TIDAK membagikan data pribadi Anda kepada pihak ketiga untuk tujuan komersial. Data hanya dibagikan dalam kondisi:"),
            items: &[
                item("Atas persetujuan eksplisit Anda"),
                item("Karena kewajiban hukum"),
                item("Untuk melindungi hak dan keamanan platform"),
            ],
        },
        Section {
            heading: "4. Keamanan Data",
            paragraph: Some("Kami menggunakan enkripsi dan security measures industry-standard untuk melindungi data Anda. Namun, tidak ada sistem yang 100% aman."),
            items: &[],
        },
        Section {
            heading: "5. Hak Pengguna",
            paragraph: None,
            items: &[
                item("Mengakses data pribadi Anda"),
                item("Memperbaiki data yang tidak akurat"),
                item("Menghapus akun dan data"),
                item("Membatasi pemrosesan data"),
                item("Portabilitas data"),
            ],
        },
        Section {
            heading: "6. Cookies dan Tracking",
            paragraph: Some("Kami menggunakan cookies untuk analytics dan meningkatkan pengalaman pengguna. Anda dapat mengatur preferensi cookies di browser Anda."),
            items: &[],
        },
        Section {
            heading: "7. Penyimpanan Data",
            paragraph: Some("Data disimpan di server yang berlokasi di Indonesia dan Singapore. Data akan dihapus jika akun dihapus atau setelah periode inaktif yang lama."),
            items: &[],
        },
        Section {
            heading: "8. Kontak",
            paragraph: Some("Untuk pertanyaan mengenai privasi atau untuk menggunakan hak Anda, hubungi kami di privacy@tumbuhide.com"),
            items: &[],
        },
    ],
};

// ============================================================================
// Contact
// ============================================================================

#[derive(Clone, Copy, Debug)]
pub struct Channel {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTACT_CHANNELS: [Channel; 3] = [
    Channel {
        icon: "✉️",
        title: "Email",
        lines: &["hello@tumbuhide.com", "support@tumbuhide.com"],
    },
    Channel {
        icon: "📞",
        title: "WhatsApp",
        lines: &["+62 821-XXXX-XXXX", "Senin - Jumat, 09:00 - 18:00 WIB"],
    },
    Channel {
        icon: "📍",
        title: "Alamat",
        lines: &["Surabaya, Jawa Timur", "Indonesia"],
    },
];

pub const SOCIAL_LINKS: [&str; 3] = ["Twitter", "Instagram", "TikTok"];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_feature_titles_unique() {
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
        assert_eq!(highlights().len(), 3);
        assert_eq!(highlights()[0].title, "Satu Link, Semua Platform");
    }

    #[test]
    fn test_legal_documents_are_numbered() {
        for doc in [TERMS, PRIVACY] {
            assert_eq!(doc.sections.len(), 8);
            for (i, section) in doc.sections.iter().enumerate() {
                assert!(section.heading.starts_with(&format!("{}. ", i + 1)));
                assert!(section.paragraph.is_some() || !section.items.is_empty());
            }
        }
    }
}
