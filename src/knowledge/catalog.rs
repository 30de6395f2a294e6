//! Built-in Systems & Networks FAQ catalog
//!
//! Entry order is significant: ties in matching go to the earlier entry.

use super::FaqSeed;

pub(super) const SEEDS: &[FaqSeed] = &[
    FaqSeed {
        keywords: &["company", "about", "who", "systems", "networks", "business", "organization"],
        question: "About Systems & Networks",
        answer: "Systems & Networks is a Pune-based IT services company with 25+ years of experience in IT infrastructure and consulting. We serve startups, SMEs, and enterprises across India, providing reliable and professional IT solutions.",
    },
    FaqSeed {
        keywords: &["experience", "years", "how long", "established", "founded"],
        question: "How long have you been in business?",
        answer: "We have 25+ years of proven IT infrastructure experience and 30+ years of consultation experience, making us a trusted partner for businesses of all sizes.",
    },
    FaqSeed {
        keywords: &["location", "where", "office", "pune", "address", "based"],
        question: "Where are you located?",
        answer: "We are based in Pune, India, and serve clients across local and national markets throughout India.",
    },
    FaqSeed {
        keywords: &["mission", "vision", "values", "goal", "purpose"],
        question: "What is your mission?",
        answer: "Our mission is to empower businesses with reliable, scalable, and secure IT infrastructure solutions. We aim to be a trusted technology partner that drives digital transformation and operational excellence.",
    },
    FaqSeed {
        keywords: &["team", "employees", "staff", "people", "experts"],
        question: "Tell me about your team",
        answer: "Our team consists of experienced IT professionals, certified engineers, and consultants with expertise spanning networking, servers, cloud computing, and enterprise IT management. We combine technical excellence with customer-focused service.",
    },
    FaqSeed {
        keywords: &["why choose", "why us", "advantage", "difference", "benefit"],
        question: "Why choose Systems & Networks?",
        answer: "Choose us for:<br>• 25+ years of proven IT expertise<br>• End-to-end IT solutions<br>• Personalized service for each client<br>• Proactive support and maintenance<br>• Trusted by startups to MNCs<br>• Local presence with national reach",
    },
    FaqSeed {
        keywords: &["services", "what do you do", "offerings", "provide", "sell"],
        question: "What services do you offer?",
        answer: "We offer comprehensive IT services including:<br>• IT Infrastructure design and deployment<br>• Networking solutions (LAN, WAN, Wi-Fi)<br>• Servers & Cloud solutions<br>• Computers & Laptops<br>• IT Rentals<br>• Domain, Hosting & Professional Email<br>• Annual Maintenance Contracts (AMC)",
    },
    FaqSeed {
        keywords: &["consultation", "consulting", "advice", "recommend", "guidance"],
        question: "Do you offer IT consultation?",
        answer: "Yes! We provide expert IT consultation services with 30+ years of experience. We help businesses assess their technology needs, plan infrastructure upgrades, optimize IT spending, and develop long-term technology roadmaps.",
    },
    FaqSeed {
        keywords: &["industry", "sector", "vertical", "specialize"],
        question: "What industries do you serve?",
        answer: "We serve diverse industries including manufacturing, retail, healthcare, education, financial services, hospitality, and professional services. Our solutions are customized to meet industry-specific requirements and compliance needs.",
    },
    FaqSeed {
        keywords: &["infrastructure", "it infrastructure", "deployment", "setup"],
        question: "IT Infrastructure Services",
        answer: "We design, deploy, and modernize on-premise and hybrid IT environments built for performance and scalability. Our infrastructure services ensure your business has a reliable and secure technology foundation.",
    },
    FaqSeed {
        keywords: &["data center", "datacenter", "server room"],
        question: "Data Center Services",
        answer: "We design and implement data center solutions including rack infrastructure, cooling systems, power management, cabling, and environmental monitoring. We ensure your server room operates efficiently and reliably.",
    },
    FaqSeed {
        keywords: &["structured cabling", "cabling", "cable management", "wiring"],
        question: "Structured Cabling Services",
        answer: "We provide professional structured cabling services including Cat6/Cat6a network cabling, fiber optic installation, cable management, and testing. Proper cabling ensures reliable network performance and future scalability.",
    },
    FaqSeed {
        keywords: &["rack", "server rack", "cabinet", "enclosure"],
        question: "Server Rack Solutions",
        answer: "We supply and install server racks, wall-mount cabinets, and rack accessories including PDUs, cable management, and cooling solutions. Proper rack infrastructure protects your equipment and enables efficient data center operations.",
    },
    FaqSeed {
        keywords: &["network", "networking", "lan", "wan", "wifi", "connectivity"],
        question: "Networking Services",
        answer: "We provide secure LAN, WAN, and Wi-Fi solutions with reliable connectivity, performance optimization, and remote access capabilities. Our networking services ensure seamless communication across your organization.",
    },
    FaqSeed {
        keywords: &["router", "switch", "firewall", "access point", "network device"],
        question: "Network Equipment",
        answer: "We supply and configure enterprise-grade routers, switches, firewalls, and wireless access points from leading vendors. We help you choose the right equipment based on your network size, performance needs, and budget.",
    },
    FaqSeed {
        keywords: &["wifi", "wireless", "access point", "wlan"],
        question: "Wi-Fi Solutions",
        answer: "We design and deploy enterprise Wi-Fi networks with optimal coverage, capacity, and security. Our solutions include site surveys, access point placement, guest networks, and centralized management for reliable wireless connectivity.",
    },
    FaqSeed {
        keywords: &["vpn", "remote access", "work from home", "secure access"],
        question: "VPN and Remote Access",
        answer: "We implement secure VPN solutions enabling employees to access company resources remotely. Our remote access solutions include SSL VPNs, IPSec VPNs, and zero-trust network access (ZTNA) for enhanced security.",
    },
    FaqSeed {
        keywords: &["network security", "firewall", "intrusion", "threat"],
        question: "Network Security",
        answer: "We implement multi-layered network security including next-generation firewalls, intrusion prevention systems (IPS), content filtering, and network segmentation. Our security solutions protect your network from cyber threats.",
    },
    FaqSeed {
        keywords: &["bandwidth", "internet", "isp", "connection", "broadband"],
        question: "Internet Connectivity",
        answer: "We help businesses select and implement appropriate internet connectivity solutions including broadband, leased lines, and SD-WAN. We ensure reliable internet access with proper backup connections for business continuity.",
    },
    FaqSeed {
        keywords: &["network monitoring", "monitoring", "network management"],
        question: "Network Monitoring",
        answer: "We implement network monitoring tools that provide visibility into network performance, bandwidth usage, and potential issues. Proactive monitoring helps prevent downtime and optimize network performance.",
    },
    FaqSeed {
        keywords: &["server", "cloud", "storage", "backup", "virtualization"],
        question: "Servers & Cloud Services",
        answer: "We offer virtualization, storage, backup, disaster recovery, and cloud integration solutions aligned with your business continuity goals. Our server solutions ensure your data is safe and accessible.",
    },
    FaqSeed {
        keywords: &["physical server", "dedicated server", "tower server", "rack server"],
        question: "Physical Server Solutions",
        answer: "We provide enterprise-grade physical servers including tower servers, rack servers, and blade servers. We help with sizing, configuration, installation, and ongoing management of your server infrastructure.",
    },
    FaqSeed {
        keywords: &["virtualization", "vmware", "hyper-v", "virtual machine", "vm"],
        question: "Server Virtualization",
        answer: "We implement virtualization solutions using VMware, Hyper-V, and other platforms. Virtualization reduces hardware costs, improves resource utilization, and enables faster deployment of new servers.",
    },
    FaqSeed {
        keywords: &["cloud migration", "move to cloud", "cloud adoption"],
        question: "Cloud Migration Services",
        answer: "We help businesses migrate to cloud platforms including AWS, Azure, and Google Cloud. Our migration services include assessment, planning, execution, and optimization to ensure a smooth transition.",
    },
    FaqSeed {
        keywords: &["hybrid cloud", "public cloud", "private cloud"],
        question: "Cloud Infrastructure Options",
        answer: "We help you choose the right cloud model:<br>• <strong>Public Cloud:</strong> AWS, Azure, Google Cloud<br>• <strong>Private Cloud:</strong> On-premise or hosted<br>• <strong>Hybrid Cloud:</strong> Combination of public and private<br>We design solutions that balance performance, security, and cost.",
    },
    FaqSeed {
        keywords: &["backup", "data backup", "backup solution"],
        question: "Backup Solutions",
        answer: "We implement comprehensive backup solutions including on-site, off-site, and cloud backups. Our solutions ensure your data is protected with automated backups, versioning, and fast recovery capabilities.",
    },
    FaqSeed {
        keywords: &["disaster recovery", "dr", "business continuity", "bcp"],
        question: "Disaster Recovery Planning",
        answer: "We develop disaster recovery plans and implement solutions to ensure business continuity. This includes backup systems, replication, failover mechanisms, and documented recovery procedures to minimize downtime.",
    },
    FaqSeed {
        keywords: &["storage", "nas", "san", "file server", "data storage"],
        question: "Storage Solutions",
        answer: "We provide enterprise storage solutions including NAS (Network Attached Storage), SAN (Storage Area Network), and direct-attached storage. We help you choose scalable storage that meets performance and capacity needs.",
    },
    FaqSeed {
        keywords: &["computer", "laptop", "desktop", "workstation", "pc"],
        question: "Computers & Laptops",
        answer: "We handle procurement, configuration, deployment, and lifecycle management of end-user computing devices. We help you choose the right hardware for your business needs.",
    },
    FaqSeed {
        keywords: &["brand", "manufacturer", "dell", "hp", "lenovo"],
        question: "What computer brands do you work with?",
        answer: "We work with leading manufacturers including Dell, HP, Lenovo, Acer, ASUS, and others. We help you select the best brand and model based on your requirements, budget, and support needs.",
    },
    FaqSeed {
        keywords: &["bulk", "volume", "multiple", "many computers"],
        question: "Bulk Computer Procurement",
        answer: "Yes, we handle bulk procurement for businesses needing multiple computers or laptops. We offer competitive pricing, coordinated delivery, and mass deployment services with standard configurations.",
    },
    FaqSeed {
        keywords: &["workstation", "high performance", "cad", "design", "graphics"],
        question: "Workstation Solutions",
        answer: "We provide high-performance workstations for demanding applications like CAD, 3D modeling, video editing, and data analysis. We configure systems with professional graphics cards, high RAM, and fast storage.",
    },
    FaqSeed {
        keywords: &["thin client", "zero client", "vdi"],
        question: "Thin Client Solutions",
        answer: "We implement thin client and VDI (Virtual Desktop Infrastructure) solutions that centralize desktop management, improve security, and reduce hardware costs. Ideal for organizations wanting centralized control.",
    },
    FaqSeed {
        keywords: &["rental", "rent", "lease", "temporary", "short-term"],
        question: "IT Rentals",
        answer: "We provide flexible hardware rental solutions for short-term projects, seasonal demand, training programs, and events. Perfect for temporary IT needs without long-term commitment.",
    },
    FaqSeed {
        keywords: &["rent laptop", "laptop rental", "rent computer"],
        question: "Laptop and Computer Rentals",
        answer: "We offer laptop and desktop rentals for any duration - daily, weekly, monthly, or longer. Equipment is pre-configured and ready to use. Perfect for temporary staff, projects, training, or events.",
    },
    FaqSeed {
        keywords: &["rent server", "server rental", "temporary server"],
        question: "Server Rentals",
        answer: "We provide server rentals for temporary needs including testing, development, events, or short-term projects. Servers come fully configured and can be customized to your specifications.",
    },
    FaqSeed {
        keywords: &["rent network", "network rental", "temporary network"],
        question: "Network Equipment Rentals",
        answer: "We rent networking equipment including routers, switches, wireless access points, and firewalls. Ideal for temporary offices, events, expansion during peak periods, or testing new equipment.",
    },
    FaqSeed {
        keywords: &["event", "conference", "exhibition", "tradeshow"],
        question: "Event IT Rentals",
        answer: "We provide complete IT rental solutions for events, conferences, exhibitions, and trade shows including laptops, tablets, projectors, network equipment, and on-site technical support.",
    },
    FaqSeed {
        keywords: &["domain", "hosting", "email", "website", "web", "professional email"],
        question: "Domain, Hosting & Email",
        answer: "We provide domain registration, web hosting, and professional email solutions with reliable uptime and support. Get your business online with our hosting services.",
    },
    FaqSeed {
        keywords: &["register domain", "domain registration", "buy domain", "domain name"],
        question: "Domain Registration",
        answer: "We handle domain registration for all major TLDs (.com, .in, .org, .net, etc.). We help you choose the right domain name, manage renewals, and configure DNS settings for your business.",
    },
    FaqSeed {
        keywords: &["web hosting", "website hosting", "shared hosting", "hosting plan"],
        question: "Web Hosting Services",
        answer: "We offer reliable web hosting with 99.9% uptime, fast loading speeds, regular backups, and 24/7 support. Plans range from shared hosting for small sites to dedicated servers for high-traffic applications.",
    },
    FaqSeed {
        keywords: &["business email", "professional email", "corporate email", "email hosting"],
        question: "Professional Email Solutions",
        answer: "We provide professional email services using your domain name (name@yourcompany.com). Solutions include Microsoft 365, Google Workspace, or custom email hosting with spam protection and mobile access.",
    },
    FaqSeed {
        keywords: &["microsoft 365", "office 365", "microsoft office"],
        question: "Microsoft 365 Services",
        answer: "We are authorized resellers of Microsoft 365 (Office 365) providing email, Office applications, OneDrive storage, and Teams collaboration. We handle setup, migration, and ongoing support.",
    },
    FaqSeed {
        keywords: &["google workspace", "g suite", "gmail business"],
        question: "Google Workspace",
        answer: "We provide Google Workspace (formerly G Suite) with Gmail, Google Drive, Docs, Sheets, and Meet. Ideal for businesses wanting Google's cloud productivity tools with professional email.",
    },
    FaqSeed {
        keywords: &["ssl", "https", "security certificate", "ssl certificate"],
        question: "SSL Certificates",
        answer: "We provide and install SSL certificates to secure your website with HTTPS encryption. SSL certificates protect sensitive data, improve SEO rankings, and build customer trust.",
    },
    FaqSeed {
        keywords: &["amc", "maintenance", "support", "annual", "contract"],
        question: "Annual Maintenance Contract",
        answer: "Our AMC services include proactive monitoring, preventive maintenance, and responsive support to ensure uninterrupted operations. We keep your IT systems running smoothly year-round.",
    },
    FaqSeed {
        keywords: &["support hours", "availability", "when", "business hours", "working hours"],
        question: "Support Hours",
        answer: "Our support is available during business hours (Monday-Saturday, 9 AM - 6 PM IST). For AMC customers, we offer extended support options including 24/7 emergency support for critical systems.",
    },
    FaqSeed {
        keywords: &["remote support", "remote assistance", "online support"],
        question: "Remote Support Services",
        answer: "We provide remote support for many IT issues including software troubleshooting, configuration changes, and system monitoring. Remote support enables faster resolution times and reduces on-site visit costs.",
    },
    FaqSeed {
        keywords: &["onsite", "on-site", "visit", "come to office"],
        question: "On-Site Support",
        answer: "We provide on-site support for hardware installation, troubleshooting, and issues requiring physical presence. AMC customers receive priority on-site service with guaranteed response times.",
    },
    FaqSeed {
        keywords: &["emergency", "urgent", "critical", "down", "outage"],
        question: "Emergency Support",
        answer: "For critical system failures, we provide emergency support to minimize downtime. AMC customers have dedicated emergency contacts and guaranteed response times based on their service level agreement.",
    },
    FaqSeed {
        keywords: &["quote", "pricing", "cost", "price", "how much"],
        question: "How do I get a quote?",
        answer: "Please contact us directly via email or phone to discuss your requirements. We provide customized quotes based on your specific needs and project scope.",
    },
    FaqSeed {
        keywords: &["payment", "terms", "billing", "invoice"],
        question: "Payment Terms",
        answer: "We accept various payment methods including bank transfer, checks, and online payments. Payment terms are flexible and typically include milestone-based payments for projects and monthly/annual billing for services.",
    },
    FaqSeed {
        keywords: &["warranty", "guarantee", "coverage"],
        question: "Warranty and Guarantees",
        answer: "All hardware comes with manufacturer warranty. We handle warranty claims and provide replacement during warranty period. Our services include satisfaction guarantees and we stand behind our work.",
    },
    FaqSeed {
        keywords: &["client", "customer", "who do you serve", "clientele"],
        question: "Who are your clients?",
        answer: "We serve a diverse range of clients from startups to MNCs (Multi-National Corporations) across various industries. Our experience spans small businesses to large enterprises.",
    },
    FaqSeed {
        keywords: &["startup", "small business", "sme", "entrepreneur"],
        question: "Services for Startups",
        answer: "We help startups establish reliable IT infrastructure at reasonable costs. Our solutions scale with your growth and include flexible rental options, cloud solutions, and essential IT services to get you started.",
    },
    FaqSeed {
        keywords: &["enterprise", "large company", "corporation", "mnc"],
        question: "Enterprise Solutions",
        answer: "We provide enterprise-grade solutions for large organizations including complex network design, data center services, multi-location deployments, and 24/7 support with stringent SLAs.",
    },
    FaqSeed {
        keywords: &["reference", "case study", "portfolio", "past work"],
        question: "Client References",
        answer: "We have successfully served numerous clients across industries. For specific case studies and references, please contact us directly. We can provide relevant examples based on your industry and requirements.",
    },
    FaqSeed {
        keywords: &["system", "operating system", "os", "windows", "linux"],
        question: "What are operating systems?",
        answer: "An operating system (OS) is software that manages computer hardware and software resources. Common examples include Windows, Linux, and macOS. We help you choose and deploy the right OS for your business needs.",
    },
    FaqSeed {
        keywords: &["what is network", "networking basics", "network basics"],
        question: "What is computer networking?",
        answer: "Computer networking connects multiple computers and devices to share resources and communicate. It includes LANs (Local Area Networks), WANs (Wide Area Networks), and internet connectivity. We design and implement secure networks for businesses.",
    },
    FaqSeed {
        keywords: &["ip address", "ip", "network address"],
        question: "What is an IP Address?",
        answer: "An IP address is a unique numerical label assigned to each device on a network. It enables devices to communicate with each other. We manage IP addressing schemes including static IPs, DHCP, and public IP allocation.",
    },
    FaqSeed {
        keywords: &["what is server", "server definition"],
        question: "What is a server?",
        answer: "A server is a powerful computer that provides services, data, or resources to other computers (clients) on a network. Common types include file servers, web servers, email servers, and database servers.",
    },
    FaqSeed {
        keywords: &["what is cloud", "cloud computing", "cloud definition"],
        question: "What is Cloud Computing?",
        answer: "Cloud computing delivers IT resources (servers, storage, databases, software) over the internet on-demand. Benefits include scalability, cost savings, accessibility from anywhere, and reduced IT management burden.",
    },
    FaqSeed {
        keywords: &["cybersecurity", "security", "cyber attack", "hacking"],
        question: "Cybersecurity Services",
        answer: "We implement comprehensive cybersecurity measures including firewalls, antivirus, intrusion detection, security audits, employee training, and incident response planning to protect your business from cyber threats.",
    },
    FaqSeed {
        keywords: &["antivirus", "malware", "virus protection"],
        question: "Antivirus Solutions",
        answer: "We deploy enterprise antivirus and anti-malware solutions that protect endpoints, servers, and network devices. Our solutions include centralized management, automatic updates, and threat reporting.",
    },
    FaqSeed {
        keywords: &["contact", "reach", "call", "phone", "email", "get in touch"],
        question: "How can I contact you?",
        answer: "You can reach us at:<br>📧 Email: info@sysandnet.com<br>📱 Phone: +91 96232 68939<br>🔗 LinkedIn: linkedin.com/company/systems-networks<br>Or visit our Contact page for more details.",
    },
    FaqSeed {
        keywords: &["navigate", "pages", "menu", "sections", "website"],
        question: "How do I navigate this website?",
        answer: "Our website has the following main sections:<br>• Home - Overview of our company<br>• About - Company information and background<br>• Services - Detailed service offerings<br>• Contact - Get in touch with us<br>Use the navigation menu at the top to browse.",
    },
    FaqSeed {
        keywords: &["help", "support", "assist", "question"],
        question: "How can you help me?",
        answer: "I can answer questions about Systems & Networks, our services, IT concepts, and help you navigate this website. Feel free to ask about our company, services, or contact information!",
    },
    FaqSeed {
        keywords: &["social media", "linkedin", "facebook", "twitter", "follow"],
        question: "Social Media Presence",
        answer: "Connect with us on LinkedIn: linkedin.com/company/systems-networks. Stay updated on our latest offerings, IT tips, and industry insights.",
    },
];
