mod login_logout;
